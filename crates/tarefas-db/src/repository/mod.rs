//! # Repository Module
//!
//! Database repository implementations for Tarefas.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CategoryService::delete                                               │
//! │       │                                                                 │
//! │       │  let mut tx = db.begin().await?;                               │
//! │       │  db.items().exists_by_category(&mut tx, id)                    │
//! │       │  db.categories().delete(&mut tx, id)                           │
//! │       ▼                                                                 │
//! │  Repositories (stateless, Copy)                                        │
//! │  ├── CategoryRepository                                                │
//! │  └── ItemRepository                                                    │
//! │       │                                                                 │
//! │       │  SQL on the borrowed connection                                │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories own no connection. Every method borrows a
//! `&mut SqliteConnection`, so the caller decides whether a sequence of
//! calls shares one transaction or runs on a plain pooled connection.
//!
//! ## Available Repositories
//!
//! - [`CategoryRepository`] - Category CRUD and name lookups
//! - [`ItemRepository`] - Item CRUD and per-category queries

pub mod category;
pub mod item;

pub use category::CategoryRepository;
pub use item::ItemRepository;
