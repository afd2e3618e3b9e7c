//! # Error Types
//!
//! Domain-specific error types for tarefas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tarefas-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tarefas-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  API errors (apps/api)                                                 │
//! │  ├── ServiceError     - CoreError | DbError, returned by services      │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → ApiError → Client  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, ID, field)
//! 3. Errors are enum variants, never String
//! 4. Each variant belongs to exactly one [`ErrorKind`], which the HTTP
//!    layer maps to a status code in one place

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by the category and item services.
///
/// Messages are in Portuguese because they are returned verbatim to API
/// clients in the `message` field of the error body.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Request failed input validation (blank name, missing category, ...).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Another category already uses the requested name.
    ///
    /// ## When This Occurs
    /// - Creating a category whose name is taken
    /// - Renaming a category to a name another category uses
    #[error("Já existe uma categoria com o nome: {name}")]
    DuplicateName { name: String },

    /// The category still owns items, so it cannot be renamed or deleted.
    ///
    /// ## User Workflow
    /// ```text
    /// DELETE /categorias/{id}
    ///      │
    ///      ▼
    /// items with category_id = id? ── yes ──► HasItems (400)
    ///      │
    ///      no
    ///      ▼
    /// row deleted (204)
    /// ```
    #[error("Não é possível excluir ou alterar a categoria com ID: {id} pois possui itens associados.")]
    HasItems { id: String },

    /// No category has the given id.
    #[error("Categoria não encontrada com ID: {id}")]
    CategoryNotFound { id: String },

    /// No item has the given id.
    #[error("Item não encontrado com ID: {id}")]
    ItemNotFound { id: String },
}

/// Coarse classification of a [`CoreError`].
///
/// The HTTP boundary matches on this once to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    DuplicateName,
    HasItems,
    NotFound,
}

impl CoreError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::DuplicateName { .. } => ErrorKind::DuplicateName,
            CoreError::HasItems { .. } => ErrorKind::HasItems,
            CoreError::CategoryNotFound { .. } | CoreError::ItemNotFound { .. } => {
                ErrorKind::NotFound
            }
        }
    }

    /// Returns the offending entity id, when the error carries one.
    pub fn id(&self) -> Option<&str> {
        match self {
            CoreError::HasItems { id }
            | CoreError::CategoryNotFound { id }
            | CoreError::ItemNotFound { id } => Some(id),
            CoreError::Validation(_) | CoreError::DuplicateName { .. } => None,
        }
    }

    /// Creates a CategoryNotFound error.
    pub fn category_not_found(id: impl Into<String>) -> Self {
        CoreError::CategoryNotFound { id: id.into() }
    }

    /// Creates an ItemNotFound error.
    pub fn item_not_found(id: impl Into<String>) -> Self {
        CoreError::ItemNotFound { id: id.into() }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a request body or path parameter doesn't meet
/// requirements. Checked before any database access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("O campo {field} é obrigatório.")]
    Required { field: String },

    /// Field value is too long.
    #[error("O campo {field} deve ter no máximo {max} caracteres.")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., invalid UUID, invalid date).
    #[error("O campo {field} possui formato inválido: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
