//! # Service Layer
//!
//! Business rules for categories and items.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Handler ──► Service ──► validate input (tarefas-core, no I/O)         │
//! │                 │                                                       │
//! │                 ├── reads:  db.acquire()  → repository calls           │
//! │                 └── writes: db.begin()    → checks + write → commit    │
//! │                                                                         │
//! │  Any `?` before commit drops the transaction, which rolls it back.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Services are stateless apart from a cloned [`tarefas_db::Database`]
//! handle, so cloning one per request is free.

pub mod category_service;
pub mod item_service;

pub use category_service::CategoryService;
pub use item_service::ItemService;
