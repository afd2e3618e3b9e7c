//! # Category Repository
//!
//! Database operations for categories.
//!
//! The `name` column is UNIQUE; a racing duplicate insert surfaces as
//! [`DbError::UniqueViolation`] even when the service-level check passed.

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use tarefas_core::Category;

/// Repository for category database operations.
///
/// ## Usage
/// ```rust,ignore
/// let mut conn = db.acquire().await?;
/// let all = db.categories().list(&mut conn).await?;
/// let one = db.categories().get_by_id(&mut conn, "uuid-here").await?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRepository;

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new() -> Self {
        CategoryRepository
    }

    /// Inserts a new category.
    pub async fn insert(&self, conn: &mut SqliteConnection, category: &Category) -> DbResult<()> {
        debug!(id = %category.id, name = %category.name, "Inserting category");

        sqlx::query("INSERT INTO categories (id, name) VALUES (?1, ?2)")
            .bind(&category.id)
            .bind(&category.name)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Gets a category by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Category))` - Category found
    /// * `Ok(None)` - Category not found
    pub async fn get_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: &str,
    ) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(category)
    }

    /// Finds a category by exact (case-sensitive) name.
    pub async fn find_by_name(
        &self,
        conn: &mut SqliteConnection,
        name: &str,
    ) -> DbResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = ?1")
                .bind(name)
                .fetch_optional(&mut *conn)
                .await?;

        Ok(category)
    }

    /// Lists all categories in insertion order.
    pub async fn list(&self, conn: &mut SqliteConnection) -> DbResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY rowid")
                .fetch_all(&mut *conn)
                .await?;

        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Renames a category.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No category with that ID
    pub async fn update_name(
        &self,
        conn: &mut SqliteConnection,
        id: &str,
        name: &str,
    ) -> DbResult<()> {
        debug!(id = %id, name = %name, "Renaming category");

        let result = sqlx::query("UPDATE categories SET name = ?1 WHERE id = ?2")
            .bind(name)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }

    /// Deletes a category.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No category with that ID
    /// * `Err(DbError::ForeignKeyViolation)` - The category still owns items
    pub async fn delete(&self, conn: &mut SqliteConnection, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting category");

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }

    /// Returns true if a category with this ID exists.
    pub async fn exists(&self, conn: &mut SqliteConnection, id: &str) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)")
                .bind(id)
                .fetch_one(&mut *conn)
                .await?;

        Ok(exists)
    }

    /// Counts all categories.
    pub async fn count(&self, conn: &mut SqliteConnection) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
