//! # Transfer Objects
//!
//! The JSON shapes accepted and returned by the API, decoupled from the
//! storage entities in [`crate::types`].
//!
//! ## Why DTOs?
//! - The wire contract uses Portuguese field names (`nome`, `descricao`,
//!   `categoriaId`) and `dd/MM/yyyy HH:mm` dates; entities don't
//! - Requests are lenient on shape (missing fields deserialize to empty) so
//!   that the services can report a precise validation error instead of a
//!   generic deserialization failure
//! - Responses omit optional dates when absent

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::datetime::format_date_time;
use crate::types::{Category, Item};

// =============================================================================
// Category
// =============================================================================

/// A category as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryDto {
    pub id: String,

    #[serde(rename = "nome")]
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        CategoryDto {
            id: c.id,
            name: c.name,
        }
    }
}

/// Body of `POST /categorias` and `PUT /categorias/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryRequest {
    #[serde(rename = "nome", default)]
    pub name: String,
}

impl CategoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        CategoryRequest { name: name.into() }
    }
}

// =============================================================================
// Item
// =============================================================================

/// An item as returned by the API.
///
/// ## Example
/// ```json
/// {
///   "id": "747ab89b-0e9e-4c21-aeda-36daec191de7",
///   "descricao": "Enviar relatório mensal",
///   "concluido": false,
///   "dataCriacao": "09/03/2025 15:00",
///   "dataLimite": "31/03/2025 18:00",
///   "categoriaId": "5f0c6a39-3a43-4a8e-9b0e-1f3a1d1f2c11"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDto {
    pub id: String,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "concluido")]
    pub completed: bool,

    #[serde(rename = "dataCriacao")]
    pub created_at: String,

    #[serde(rename = "dataAtualizacao", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(rename = "dataLimite", default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,

    #[serde(rename = "categoriaId")]
    pub category_id: String,
}

impl From<Item> for ItemDto {
    fn from(i: Item) -> Self {
        ItemDto {
            id: i.id,
            description: i.description,
            completed: i.completed,
            created_at: format_date_time(&i.created_at),
            updated_at: i.updated_at.as_ref().map(format_date_time),
            due_at: i.due_at.as_ref().map(format_date_time),
            category_id: i.category_id,
        }
    }
}

/// Body of `POST /itens`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewItemRequest {
    #[serde(rename = "descricao", default)]
    pub description: String,

    /// Defaults to `false` when omitted.
    #[serde(rename = "concluido", default)]
    pub completed: bool,

    /// `dd/MM/yyyy HH:mm`
    #[serde(rename = "dataLimite", default)]
    pub due_at: Option<String>,

    #[serde(rename = "categoriaId", default)]
    pub category_id: Option<String>,
}

/// Body of `PUT /itens/{id}`.
///
/// Every field is optional: an absent field keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemUpdateRequest {
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,

    #[serde(rename = "concluido", default)]
    pub completed: Option<bool>,

    #[serde(rename = "dataLimite", default)]
    pub due_at: Option<String>,

    #[serde(rename = "categoriaId", default)]
    pub category_id: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
