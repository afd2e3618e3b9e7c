//! # Domain Types
//!
//! Core domain entities used throughout Tarefas.
//!
//! ## Entity Relationship
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌──────────────────────┐               │
//! │  │    Category     │  1      *  │        Item          │               │
//! │  │  ─────────────  │◄───────────│  ──────────────────  │               │
//! │  │  id (UUID)      │            │  id (UUID)           │               │
//! │  │  name (unique)  │            │  description         │               │
//! │  └─────────────────┘            │  completed           │               │
//! │                                 │  due_at?             │               │
//! │                                 │  created_at          │               │
//! │                                 │  updated_at?         │               │
//! │                                 │  category_id (FK)    │               │
//! │                                 └──────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Without Back-References
//! An item holds the id of its category, never the category itself.
//! "Which items does this category own?" is a query
//! (`items WHERE category_id = ?`), not a collection on `Category`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Category
// =============================================================================

/// A named grouping of items. The name is unique across all categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, unique (case-sensitive).
    pub name: String,
}

impl Category {
    /// Creates a category with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            id: new_id(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A task that belongs to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// What needs to be done. Never blank.
    pub description: String,

    /// Whether the task is done.
    pub completed: bool,

    /// Optional deadline.
    pub due_at: Option<DateTime<Utc>>,

    /// Set once on insert, never changed afterwards.
    pub created_at: DateTime<Utc>,

    /// Set on every update; `None` until the first one.
    pub updated_at: Option<DateTime<Utc>>,

    /// Owning category.
    pub category_id: String,
}

impl Item {
    /// Creates a new, not yet completed item stamped with the current time.
    pub fn new(
        description: impl Into<String>,
        completed: bool,
        due_at: Option<DateTime<Utc>>,
        category_id: impl Into<String>,
    ) -> Self {
        Item {
            id: new_id(),
            description: description.into(),
            completed,
            due_at,
            created_at: Utc::now(),
            updated_at: None,
            category_id: category_id.into(),
        }
    }
}

/// Generates a new entity id (UUID v4, hyphenated lowercase).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_gets_uuid() {
        let category = Category::new("Trabalho");
        assert_eq!(category.name, "Trabalho");
        assert!(Uuid::parse_str(&category.id).is_ok());
    }

    #[test]
    fn test_new_item_defaults() {
        let before = Utc::now();
        let item = Item::new("Enviar relatório", false, None, "cat-1");

        assert!(!item.completed);
        assert!(item.updated_at.is_none());
        assert!(item.due_at.is_none());
        assert!(item.created_at >= before);
        assert_eq!(item.category_id, "cat-1");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
