//! # Item Repository
//!
//! Database operations for items.
//!
//! ## Category Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items.category_id ──FK──► categories.id   (ON DELETE RESTRICT)        │
//! │                                                                         │
//! │  insert / update with unknown category_id  → ForeignKeyViolation      │
//! │  list_by_category(id)                      → items of one category    │
//! │  exists_by_category(id)                    → guard before deleting    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use tarefas_core::Item;

const ITEM_COLUMNS: &str =
    "id, description, completed, due_at, created_at, updated_at, category_id";

/// Repository for item database operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemRepository;

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new() -> Self {
        ItemRepository
    }

    /// Inserts a new item.
    ///
    /// ## Returns
    /// * `Err(DbError::ForeignKeyViolation)` - `category_id` doesn't exist
    pub async fn insert(&self, conn: &mut SqliteConnection, item: &Item) -> DbResult<()> {
        debug!(id = %item.id, category_id = %item.category_id, "Inserting item");

        sqlx::query(
            r#"
            INSERT INTO items (
                id, description, completed, due_at, created_at, updated_at, category_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&item.id)
        .bind(&item.description)
        .bind(item.completed)
        .bind(item.due_at)
        .bind(item.created_at)
        .bind(item.updated_at)
        .bind(&item.category_id)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Gets an item by its ID.
    pub async fn get_by_id(&self, conn: &mut SqliteConnection, id: &str) -> DbResult<Option<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1");

        let item = sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(item)
    }

    /// Lists all items in insertion order.
    pub async fn list(&self, conn: &mut SqliteConnection) -> DbResult<Vec<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY rowid");

        let items = sqlx::query_as::<_, Item>(&sql)
            .fetch_all(&mut *conn)
            .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Lists the items owned by one category, in insertion order.
    pub async fn list_by_category(
        &self,
        conn: &mut SqliteConnection,
        category_id: &str,
    ) -> DbResult<Vec<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE category_id = ?1 ORDER BY rowid");

        let items = sqlx::query_as::<_, Item>(&sql)
            .bind(category_id)
            .fetch_all(&mut *conn)
            .await?;

        debug!(category_id = %category_id, count = items.len(), "Listed items by category");
        Ok(items)
    }

    /// Returns true if the category owns at least one item.
    pub async fn exists_by_category(
        &self,
        conn: &mut SqliteConnection,
        category_id: &str,
    ) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE category_id = ?1)")
                .bind(category_id)
                .fetch_one(&mut *conn)
                .await?;

        Ok(exists)
    }

    /// Writes every mutable column of an existing item.
    ///
    /// `created_at` is never touched.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No item with that ID
    /// * `Err(DbError::ForeignKeyViolation)` - `category_id` doesn't exist
    pub async fn update(&self, conn: &mut SqliteConnection, item: &Item) -> DbResult<()> {
        debug!(id = %item.id, "Updating item");

        let result = sqlx::query(
            r#"
            UPDATE items SET
                description = ?1,
                completed = ?2,
                due_at = ?3,
                updated_at = ?4,
                category_id = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&item.description)
        .bind(item.completed)
        .bind(item.due_at)
        .bind(item.updated_at)
        .bind(&item.category_id)
        .bind(&item.id)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", &item.id));
        }

        Ok(())
    }

    /// Deletes an item.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No item with that ID
    pub async fn delete(&self, conn: &mut SqliteConnection, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting item");

        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Counts all items.
    pub async fn count(&self, conn: &mut SqliteConnection) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
