//! # Validation Module
//!
//! Input validation utilities for Tarefas.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum)                                        │
//! │  └── JSON shape (malformed body → 400)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Services                                                     │
//! │  ├── THIS MODULE: field rules (blank, length, UUID, date format)       │
//! │  └── Invariants needing the database (unique name, has items, exists)  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE (categories.name)                                          │
//! │  └── FOREIGN KEY items.category_id ON DELETE RESTRICT                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tarefas_core::validation::{validate_category_name, validate_id};
//!
//! validate_category_name("Trabalho").unwrap();
//! validate_id("id", "550e8400-e29b-41d4-a716-446655440000").unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_CATEGORY_NAME_LEN, MAX_ITEM_DESCRIPTION_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a category name.
///
/// ## Rules
/// - Must not be blank (whitespace only counts as blank)
/// - At most [`MAX_CATEGORY_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use tarefas_core::validation::validate_category_name;
///
/// assert!(validate_category_name("Casa").is_ok());
/// assert!(validate_category_name("").is_err());
/// assert!(validate_category_name(&"A".repeat(101)).is_err());
/// ```
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_text("nome", name, MAX_CATEGORY_NAME_LEN)
}

/// Validates an item description.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_ITEM_DESCRIPTION_LEN`] characters
pub fn validate_item_description(description: &str) -> ValidationResult<()> {
    validate_text("descricao", description, MAX_ITEM_DESCRIPTION_LEN)
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates an entity id.
///
/// ## Rules
/// - Must not be blank
/// - Must parse as a UUID
///
/// ## Example
/// ```rust
/// use tarefas_core::validation::validate_id;
///
/// assert!(validate_id("id", "550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_id("id", "not-a-uuid").is_err());
/// ```
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    uuid::Uuid::parse_str(id)
        .map_err(|_| ValidationError::invalid_format(field, "deve ser um UUID válido"))?;

    Ok(())
}

/// Requires the category reference of a new item.
///
/// Returns the id when it is present and well formed.
pub fn require_category_id(category_id: Option<&str>) -> ValidationResult<&str> {
    match category_id {
        Some(id) if !id.trim().is_empty() => {
            validate_id("categoriaId", id)?;
            Ok(id)
        }
        _ => Err(ValidationError::required("categoriaId")),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
