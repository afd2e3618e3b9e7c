//! # tarefas-core: Pure Domain Logic for Tarefas
//!
//! This crate holds the task-management domain: categories, the items
//! they own, the transfer objects exchanged over the API, and the rules
//! that every request must satisfy before it reaches the database.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tarefas Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Routes (axum)                           │   │
//! │  │      /categorias  ──►  /itens  ──►  ErrorResponse              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Services (apps/api)                             │   │
//! │  │      CategoryService, ItemService: invariants + transactions    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tarefas-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    dto    │  │ datetime  │  │ validation│  │   │
//! │  │   │ Category  │  │CategoryDto│  │dd/MM/yyyy │  │   rules   │  │   │
//! │  │   │   Item    │  │  ItemDto  │  │  HH:mm    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tarefas-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Category, Item)
//! - [`dto`] - Transfer objects exposed by the API
//! - [`datetime`] - Wire date format (`dd/MM/yyyy HH:mm`)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tarefas_core::validation::validate_category_name;
//!
//! assert!(validate_category_name("Trabalho").is_ok());
//! assert!(validate_category_name("   ").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod datetime;
pub mod dto;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dto::{CategoryDto, CategoryRequest, ItemDto, ItemUpdateRequest, NewItemRequest};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a category name.
///
/// Mirrors the column width the schema has always used for category names.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Maximum length of an item description.
pub const MAX_ITEM_DESCRIPTION_LEN: usize = 255;
