//! Category lifecycle: create, list, get, rename, delete.
//!
//! ## Invariants
//! - Names are unique (case-sensitive)
//! - A category that owns at least one item can be neither renamed nor
//!   deleted

use tarefas_core::validation::{validate_category_name, validate_id};
use tarefas_core::{Category, CategoryDto, CategoryRequest, CoreError};
use tarefas_db::{Database, DbError};
use tracing::{debug, info};

use crate::error::ServiceResult;

/// Category operations.
#[derive(Debug, Clone)]
pub struct CategoryService {
    db: Database,
}

impl CategoryService {
    pub fn new(db: Database) -> Self {
        CategoryService { db }
    }

    /// Creates a category.
    ///
    /// ## Errors
    /// - `Validation` - blank or too long name
    /// - `DuplicateName` - another category already has this name
    pub async fn create(&self, request: CategoryRequest) -> ServiceResult<CategoryDto> {
        validate_category_name(&request.name)?;

        let mut tx = self.db.begin().await?;

        if self
            .db
            .categories()
            .find_by_name(&mut tx, &request.name)
            .await?
            .is_some()
        {
            return Err(CoreError::DuplicateName { name: request.name }.into());
        }

        let category = Category::new(request.name);
        self.db.categories().insert(&mut tx, &category).await?;

        tx.commit().await.map_err(DbError::transaction)?;

        info!(id = %category.id, name = %category.name, "Category created");
        Ok(category.into())
    }

    /// Lists every category in insertion order.
    pub async fn list(&self) -> ServiceResult<Vec<CategoryDto>> {
        let mut conn = self.db.acquire().await?;
        let categories = self.db.categories().list(&mut conn).await?;

        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    /// Gets one category.
    pub async fn get(&self, id: &str) -> ServiceResult<CategoryDto> {
        validate_id("id", id)?;

        let mut conn = self.db.acquire().await?;
        let category = self
            .db
            .categories()
            .get_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| CoreError::category_not_found(id))?;

        Ok(category.into())
    }

    /// Renames a category.
    ///
    /// ## Check Order
    /// 1. name valid (`Validation`)
    /// 2. category exists (`CategoryNotFound`)
    /// 3. category owns no items (`HasItems`)
    /// 4. no *other* category has the name (`DuplicateName`)
    pub async fn update(&self, id: &str, request: CategoryRequest) -> ServiceResult<CategoryDto> {
        validate_id("id", id)?;
        validate_category_name(&request.name)?;

        let mut tx = self.db.begin().await?;

        let mut category = self
            .db
            .categories()
            .get_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| CoreError::category_not_found(id))?;

        if self.db.items().exists_by_category(&mut tx, id).await? {
            return Err(CoreError::HasItems { id: id.to_string() }.into());
        }

        if let Some(other) = self
            .db
            .categories()
            .find_by_name(&mut tx, &request.name)
            .await?
        {
            if other.id != category.id {
                return Err(CoreError::DuplicateName { name: request.name }.into());
            }
        }

        self.db
            .categories()
            .update_name(&mut tx, id, &request.name)
            .await?;

        tx.commit().await.map_err(DbError::transaction)?;

        debug!(id = %id, from = %category.name, to = %request.name, "Category renamed");
        category.name = request.name;
        Ok(category.into())
    }

    /// Deletes a category that owns no items.
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        validate_id("id", id)?;

        let mut tx = self.db.begin().await?;

        if !self.db.categories().exists(&mut tx, id).await? {
            return Err(CoreError::category_not_found(id).into());
        }

        if self.db.items().exists_by_category(&mut tx, id).await? {
            return Err(CoreError::HasItems { id: id.to_string() }.into());
        }

        self.db.categories().delete(&mut tx, id).await?;

        tx.commit().await.map_err(DbError::transaction)?;

        info!(id = %id, "Category deleted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
