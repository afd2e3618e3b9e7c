//! Item lifecycle: create, list (optionally by category), get, update, delete.
//!
//! Every item references an existing category; the reference is checked
//! inside the same transaction as the write.

use chrono::Utc;
use tarefas_core::datetime::parse_optional_date_time;
use tarefas_core::validation::{require_category_id, validate_id, validate_item_description};
use tarefas_core::{CoreError, Item, ItemDto, ItemUpdateRequest, NewItemRequest};
use tarefas_db::{Database, DbError};
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};

/// Item operations.
#[derive(Debug, Clone)]
pub struct ItemService {
    db: Database,
}

impl ItemService {
    pub fn new(db: Database) -> Self {
        ItemService { db }
    }

    /// Creates an item stamped with the current time.
    ///
    /// ## Errors
    /// - `Validation` - blank description, missing/malformed `categoriaId`,
    ///   unparseable `dataLimite`
    /// - `CategoryNotFound` - `categoriaId` doesn't resolve
    pub async fn create(&self, request: NewItemRequest) -> ServiceResult<ItemDto> {
        validate_item_description(&request.description)?;
        let category_id = require_category_id(request.category_id.as_deref())?;
        let due_at = parse_optional_date_time("dataLimite", request.due_at.as_deref())?;

        let mut tx = self.db.begin().await?;

        if !self.db.categories().exists(&mut tx, category_id).await? {
            return Err(CoreError::category_not_found(category_id).into());
        }

        let item = Item::new(request.description, request.completed, due_at, category_id);
        self.db
            .items()
            .insert(&mut tx, &item)
            .await
            .map_err(|e| category_reference_error(e, &item.category_id))?;

        tx.commit().await.map_err(DbError::transaction)?;

        info!(id = %item.id, category_id = %item.category_id, "Item created");
        Ok(item.into())
    }

    /// Lists items, all of them or those of one category.
    ///
    /// ## Errors
    /// - `CategoryNotFound` - the filter names an unknown category
    pub async fn list(&self, category_id: Option<&str>) -> ServiceResult<Vec<ItemDto>> {
        let mut conn = self.db.acquire().await?;

        let items = match category_id {
            Some(category_id) => {
                validate_id("idCategoria", category_id)?;

                if !self.db.categories().exists(&mut conn, category_id).await? {
                    return Err(CoreError::category_not_found(category_id).into());
                }

                self.db.items().list_by_category(&mut conn, category_id).await?
            }
            None => self.db.items().list(&mut conn).await?,
        };

        Ok(items.into_iter().map(ItemDto::from).collect())
    }

    /// Gets one item.
    pub async fn get(&self, id: &str) -> ServiceResult<ItemDto> {
        validate_id("id", id)?;

        let mut conn = self.db.acquire().await?;
        let item = self
            .db
            .items()
            .get_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| CoreError::item_not_found(id))?;

        Ok(item.into())
    }

    /// Merges the supplied fields over the stored item.
    ///
    /// Absent fields keep their value; an empty `dataLimite` clears the
    /// deadline. `created_at` never changes, `updated_at` becomes now.
    ///
    /// ## Errors
    /// - `Validation` - a supplied field is malformed
    /// - `ItemNotFound` - unknown item id
    /// - `CategoryNotFound` - a supplied `categoriaId` doesn't resolve
    pub async fn update(&self, id: &str, request: ItemUpdateRequest) -> ServiceResult<ItemDto> {
        validate_id("id", id)?;

        // Validate everything before touching the database
        if let Some(description) = &request.description {
            validate_item_description(description)?;
        }
        if let Some(category_id) = &request.category_id {
            validate_id("categoriaId", category_id)?;
        }
        let due_at = match request.due_at.as_deref() {
            Some(raw) => Some(parse_optional_date_time("dataLimite", Some(raw))?),
            None => None,
        };

        let mut tx = self.db.begin().await?;

        let mut item = self
            .db
            .items()
            .get_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| CoreError::item_not_found(id))?;

        if let Some(category_id) = request.category_id {
            if category_id != item.category_id
                && !self.db.categories().exists(&mut tx, &category_id).await?
            {
                return Err(CoreError::category_not_found(category_id).into());
            }
            item.category_id = category_id;
        }
        if let Some(description) = request.description {
            item.description = description;
        }
        if let Some(completed) = request.completed {
            item.completed = completed;
        }
        if let Some(due_at) = due_at {
            item.due_at = due_at;
        }
        item.updated_at = Some(Utc::now());

        self.db
            .items()
            .update(&mut tx, &item)
            .await
            .map_err(|e| category_reference_error(e, &item.category_id))?;

        tx.commit().await.map_err(DbError::transaction)?;

        debug!(id = %item.id, "Item updated");
        Ok(item.into())
    }

    /// Deletes an item.
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        validate_id("id", id)?;

        let mut tx = self.db.begin().await?;

        match self.db.items().delete(&mut tx, id).await {
            Ok(()) => {}
            Err(DbError::NotFound { .. }) => return Err(CoreError::item_not_found(id).into()),
            Err(e) => return Err(e.into()),
        }

        tx.commit().await.map_err(DbError::transaction)?;

        info!(id = %id, "Item deleted");
        Ok(())
    }
}

/// On an item write the only foreign key is `category_id`, so a violation
/// means the category is gone.
fn category_reference_error(err: DbError, category_id: &str) -> ServiceError {
    match err {
        DbError::ForeignKeyViolation { .. } => CoreError::category_not_found(category_id).into(),
        other => other.into(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CategoryService;
    use tarefas_core::{CategoryRequest, ErrorKind};
    use tarefas_db::DbConfig;

    const UNUSED_ID: &str = "00000000-0000-4000-8000-000000000000";

    struct Fixture {
        categories: CategoryService,
        items: ItemService,
        category_id: String,
    }

    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let categories = CategoryService::new(db.clone());
        let items = ItemService::new(db);
        let category_id = categories
            .create(CategoryRequest::new("Trabalho"))
            .await
            .unwrap()
            .id;

        Fixture {
            categories,
            items,
            category_id,
        }
    }

    fn new_item(description: &str, category_id: &str) -> NewItemRequest {
        NewItemRequest {
            description: description.to_string(),
            category_id: Some(category_id.to_string()),
            ..Default::default()
        }
    }

    fn kind(err: ServiceError) -> ErrorKind {
        match err {
            ServiceError::Domain(e) => e.kind(),
            ServiceError::Database(e) => panic!("unexpected database error: {e}"),
        }
    }

    #[tokio::test]
    async fn test_create_returns_input_fields() {
        let f = fixture().await;

        let mut request = new_item("Enviar relatório", &f.category_id);
        request.due_at = Some("31/03/2025 18:00".to_string());

        let created = f.items.create(request).await.unwrap();
        assert_eq!(created.description, "Enviar relatório");
        assert!(!created.completed);
        assert_eq!(created.due_at.as_deref(), Some("31/03/2025 18:00"));
        assert_eq!(created.category_id, f.category_id);
        assert!(created.updated_at.is_none());

        assert_eq!(f.items.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_validation() {
        let f = fixture().await;

        let err = f.items.create(new_item("  ", &f.category_id)).await.unwrap_err();
        assert_eq!(kind(err), ErrorKind::Validation);

        let mut no_category = new_item("Tarefa", &f.category_id);
        no_category.category_id = None;
        let err = f.items.create(no_category).await.unwrap_err();
        assert_eq!(kind(err), ErrorKind::Validation);

        let mut bad_date = new_item("Tarefa", &f.category_id);
        bad_date.due_at = Some("2025-03-31".to_string());
        let err = f.items.create(bad_date).await.unwrap_err();
        assert_eq!(kind(err), ErrorKind::Validation);

        assert!(f.items.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_writes_nothing() {
        let f = fixture().await;

        let err = f.items.create(new_item("Tarefa", UNUSED_ID)).await.unwrap_err();
        assert_eq!(kind(err), ErrorKind::NotFound);
        assert!(f.items.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let f = fixture().await;
        let home = f
            .categories
            .create(CategoryRequest::new("Casa"))
            .await
            .unwrap();

        f.items.create(new_item("A", &f.category_id)).await.unwrap();
        f.items.create(new_item("B", &home.id)).await.unwrap();

        let work = f.items.list(Some(&f.category_id)).await.unwrap();
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].description, "A");
        assert_eq!(f.items.list(None).await.unwrap().len(), 2);

        let err = f.items.list(Some(UNUSED_ID)).await.unwrap_err();
        assert_eq!(kind(err), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_description_only_keeps_the_rest() {
        let f = fixture().await;
        let mut request = new_item("Ler livro", &f.category_id);
        request.completed = true;
        request.due_at = Some("01/04/2025 08:30".to_string());
        let created = f.items.create(request).await.unwrap();

        let updated = f
            .items
            .update(
                &created.id,
                ItemUpdateRequest {
                    description: Some("Ler dois livros".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, "Ler dois livros");
        assert_eq!(updated.completed, created.completed);
        assert_eq!(updated.due_at, created.due_at);
        assert_eq!(updated.category_id, created.category_id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());

        assert_eq!(f.items.get(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_moves_category_and_clears_deadline() {
        let f = fixture().await;
        let home = f
            .categories
            .create(CategoryRequest::new("Casa"))
            .await
            .unwrap();
        let mut request = new_item("Pagar conta", &f.category_id);
        request.due_at = Some("10/04/2025 12:00".to_string());
        let created = f.items.create(request).await.unwrap();

        let updated = f
            .items
            .update(
                &created.id,
                ItemUpdateRequest {
                    category_id: Some(home.id.clone()),
                    due_at: Some(String::new()),
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.category_id, home.id);
        assert!(updated.due_at.is_none());
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_update_errors() {
        let f = fixture().await;
        let created = f.items.create(new_item("Tarefa", &f.category_id)).await.unwrap();

        let err = f
            .items
            .update(UNUSED_ID, ItemUpdateRequest::default())
            .await
            .unwrap_err();
        assert_eq!(kind(err), ErrorKind::NotFound);

        let err = f
            .items
            .update(
                &created.id,
                ItemUpdateRequest {
                    category_id: Some(UNUSED_ID.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(kind(err), ErrorKind::NotFound);

        let err = f
            .items
            .update(
                &created.id,
                ItemUpdateRequest {
                    description: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(kind(err), ErrorKind::Validation);

        // nothing was applied
        let stored = f.items.get(&created.id).await.unwrap();
        assert_eq!(stored.category_id, f.category_id);
        assert_eq!(stored.description, "Tarefa");
        assert!(stored.updated_at.is_none());
    }

    #[test]
    fn test_foreign_key_failure_on_item_write_is_category_not_found() {
        let err = category_reference_error(
            DbError::ForeignKeyViolation {
                message: "FOREIGN KEY constraint failed".into(),
            },
            UNUSED_ID,
        );
        assert_eq!(kind(err), ErrorKind::NotFound);

        let err = category_reference_error(DbError::QueryFailed("disk I/O error".into()), UNUSED_ID);
        assert!(matches!(err, ServiceError::Database(DbError::QueryFailed(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("tarefas.db")))
            .await
            .unwrap();
        let categories = CategoryService::new(db.clone());
        let items = ItemService::new(db);

        let category_id = categories
            .create(CategoryRequest::new("Compartilhada"))
            .await
            .unwrap()
            .id;

        let mut category_tasks = Vec::new();
        for n in 0..20 {
            let categories = categories.clone();
            category_tasks.push(tokio::spawn(async move {
                categories
                    .create(CategoryRequest::new(format!("Categoria {n}")))
                    .await
            }));
        }

        let mut item_tasks = Vec::new();
        for n in 0..50 {
            let items = items.clone();
            let request = new_item(&format!("Item {n}"), &category_id);
            item_tasks.push(tokio::spawn(async move { items.create(request).await }));
        }

        for task in category_tasks {
            task.await.unwrap().unwrap();
        }
        for task in item_tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(categories.list().await.unwrap().len(), 21);
        assert_eq!(items.list(Some(&category_id)).await.unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_delete() {
        let f = fixture().await;
        let created = f.items.create(new_item("Tarefa", &f.category_id)).await.unwrap();

        f.items.delete(&created.id).await.unwrap();
        assert_eq!(kind(f.items.get(&created.id).await.unwrap_err()), ErrorKind::NotFound);
        assert_eq!(kind(f.items.delete(&created.id).await.unwrap_err()), ErrorKind::NotFound);
    }
}
