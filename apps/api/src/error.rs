//! # API Error Types
//!
//! Service-level errors and their HTTP rendering.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tarefas                                │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  DELETE /categorias/{id}                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler → CategoryService::delete → ServiceResult<()>           │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Database Error? ─── DbError::QueryFailed("...") ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Business rule? ─── CoreError::HasItems ───────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── 400 { "timestamp": "...", "status": 400,                         │
//! │              "error": "Erro de Categoria", "message": "..." }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Status codes are picked in exactly one place, [`ErrorCode::status`].

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tarefas_core::{CoreError, ValidationError};
use tarefas_db::DbError;

// =============================================================================
// Service Error
// =============================================================================

/// Error returned by the category and item services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A business rule or validation failed.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// The database failed.
    #[error(transparent)]
    Database(#[from] DbError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Domain(err.into())
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// API Error
// =============================================================================

/// Error rendered to HTTP clients.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Decides the status code and the error title
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or missing input (400)
    ValidationError,

    /// Category name already taken (400)
    DuplicateName,

    /// Category still owns items (400)
    HasItems,

    /// Category id doesn't resolve (404)
    CategoryNotFound,

    /// Item id doesn't resolve (404)
    ItemNotFound,

    /// Database operation failed (500)
    DatabaseError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError | ErrorCode::DuplicateName | ErrorCode::HasItems => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::CategoryNotFound | ErrorCode::ItemNotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short title placed in the `error` field of the body.
    pub fn title(self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Erro de Validação",
            ErrorCode::DuplicateName | ErrorCode::HasItems | ErrorCode::CategoryNotFound => {
                "Erro de Categoria"
            }
            ErrorCode::ItemNotFound => "Erro de Item",
            ErrorCode::DatabaseError | ErrorCode::Internal => "Erro Interno",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::DuplicateName { .. } => ErrorCode::DuplicateName,
            CoreError::HasItems { .. } => ErrorCode::HasItems,
            CoreError::CategoryNotFound { .. } => ErrorCode::CategoryNotFound,
            CoreError::ItemNotFound { .. } => ErrorCode::ItemNotFound,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts database errors to API errors.
///
/// Constraint violations only reach this point when a concurrent request
/// won the race past the service-level check. Item writes turn their own
/// foreign-key failures into `CategoryNotFound` first, so a violation left
/// here comes from deleting a category that still owns items. Everything
/// else is an infrastructure failure whose details stay in the log.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { field, .. } => {
                tracing::warn!(field = %field, "Unique constraint hit after service check");
                ApiError::new(
                    ErrorCode::DuplicateName,
                    "Já existe uma categoria com este nome.",
                )
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::warn!("Foreign key violation: {}", message);
                ApiError::new(
                    ErrorCode::HasItems,
                    "Não é possível excluir uma categoria que possui itens associados.",
                )
            }
            DbError::NotFound { entity, id } => {
                tracing::error!(entity = %entity, id = %id, "Row vanished inside transaction");
                ApiError::new(ErrorCode::DatabaseError, "Falha ao acessar o banco de dados.")
            }
            other => {
                // Log the actual error but return a generic message
                tracing::error!("Database error: {}", other);
                ApiError::new(ErrorCode::DatabaseError, "Falha ao acessar o banco de dados.")
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => e.into(),
            ServiceError::Database(e) => e.into(),
        }
    }
}

/// Unreadable request bodies (bad JSON, wrong content type) are validation
/// errors with the standard body shape instead of axum's plain-text reply.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(format!(
            "Corpo da requisição inválido: {}",
            rejection.body_text()
        ))
    }
}

// =============================================================================
// HTTP Rendering
// =============================================================================

/// JSON body of every error response.
///
/// ## Example
/// ```json
/// {
///   "timestamp": "2025-03-09T15:00:00.123Z",
///   "status": 404,
///   "error": "Erro de Item",
///   "message": "Item não encontrado com ID: 5f0c6a39-..."
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: self.code.title(),
            message: self.message,
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let cases = [
            (CoreError::from(ValidationError::required("nome")), StatusCode::BAD_REQUEST),
            (CoreError::DuplicateName { name: "x".into() }, StatusCode::BAD_REQUEST),
            (CoreError::HasItems { id: "1".into() }, StatusCode::BAD_REQUEST),
            (CoreError::category_not_found("1"), StatusCode::NOT_FOUND),
            (CoreError::item_not_found("1"), StatusCode::NOT_FOUND),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(ErrorCode::ValidationError.title(), "Erro de Validação");
        assert_eq!(ErrorCode::HasItems.title(), "Erro de Categoria");
        assert_eq!(ErrorCode::ItemNotFound.title(), "Erro de Item");
        assert_eq!(ErrorCode::Internal.title(), "Erro Interno");
    }

    #[test]
    fn test_message_passes_through() {
        let err = ApiError::from(ServiceError::from(CoreError::item_not_found("abc")));
        assert_eq!(err.code, ErrorCode::ItemNotFound);
        assert_eq!(err.message, "Item não encontrado com ID: abc");
    }

    #[test]
    fn test_database_details_are_hidden() {
        let err = ApiError::from(DbError::QueryFailed("near \"SELEC\": syntax error".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("SELEC"));
    }

    #[test]
    fn test_unique_violation_is_duplicate() {
        let err = ApiError::from(DbError::duplicate("categories.name", "Casa"));
        assert_eq!(err.code, ErrorCode::DuplicateName);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_into_service_error() {
        let err: ServiceError = ValidationError::required("descricao").into();
        assert!(matches!(err, ServiceError::Domain(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_sqlite_constraint_failures_are_client_errors() {
        use tarefas_core::{Category, Item};
        use tarefas_db::{Database, DbConfig};

        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        let category = Category::new("Casa");
        db.categories().insert(&mut conn, &category).await.unwrap();
        let item = Item::new("Lavar louça", false, None, category.id.clone());
        db.items().insert(&mut conn, &item).await.unwrap();

        let restricted = db.categories().delete(&mut conn, &category.id).await.unwrap_err();
        let err = ApiError::from(ServiceError::from(restricted));
        assert_eq!(err.code, ErrorCode::HasItems);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let duplicate = db
            .categories()
            .insert(&mut conn, &Category::new("Casa"))
            .await
            .unwrap_err();
        let err = ApiError::from(ServiceError::from(duplicate));
        assert_eq!(err.code, ErrorCode::DuplicateName);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = ApiError::from(CoreError::HasItems { id: "42".into() }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["error"], "Erro de Categoria");
        assert!(json["message"].as_str().unwrap().contains("42"));
        assert!(json["timestamp"].is_string());
    }
}
