//! # Tarefas API
//!
//! REST server for task categories and their items.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tarefas API                                    │
//! │                                                                         │
//! │  ┌──────────────────────────┐  ┌──────────────────────────────────────┐│
//! │  │  /categorias             │  │  /itens                              ││
//! │  │                          │  │                                      ││
//! │  │ • POST   create          │  │ • POST   create                      ││
//! │  │ • GET    list            │  │ • GET    list (?idCategoria=)        ││
//! │  │ • GET    /{id}           │  │ • GET    /{id}                       ││
//! │  │ • PUT    /{id} rename    │  │ • PUT    /{id} partial update        ││
//! │  │ • DELETE /{id}           │  │ • DELETE /{id}                       ││
//! │  └────────────┬─────────────┘  └──────────────────┬───────────────────┘│
//! │               ▼                                   ▼                     │
//! │        CategoryService                       ItemService                │
//! │               └──────────────┬────────────────────┘                     │
//! │                              ▼                                          │
//! │                   tarefas-db (SQLite, sqlx)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`]. Environment variables:
//! - `TAREFAS_CONFIG` - Path to an `api.toml`
//! - `TAREFAS_BIND_ADDR` / `TAREFAS_PORT` - Listener (default: 0.0.0.0:8080)
//! - `TAREFAS_DATABASE_PATH` - SQLite file (default: ./tarefas.db)
//! - `TAREFAS_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `RUST_LOG` - Log filter

pub mod config;
pub mod error;
pub mod routes;
pub mod services;

use axum::Router;
use tarefas_db::Database;

// Re-exports
pub use config::{ApiConfig, DEFAULT_LOG_FILTER};
pub use error::{ApiError, ServiceError, ServiceResult};
pub use services::{CategoryService, ItemService};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub categories: CategoryService,
    pub items: ItemService,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState {
            categories: CategoryService::new(db.clone()),
            items: ItemService::new(db.clone()),
            db,
        }
    }
}

/// Builds the HTTP application.
pub fn app(state: AppState) -> Router {
    routes::router(state)
}
