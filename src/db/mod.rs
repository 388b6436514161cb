//! Database layer for the lazytodo application.
//!
//! Built on SQLite through a small storage gateway ([`db::Db`]) that turns
//! parameterized operations into SQL statements. Each domain lives in its own
//! store file holding a single table whose schema is side-loaded from a
//! `create_<name>_db.sql` script.
//!
//! ## Modules
//!
//! - **Gateway**: [`db`], [`condition`], [`schema`], [`error`]
//! - **Services**: [`todos`] and [`users`] compose gateway calls into
//!   duplicate-aware creation, seeded listings and positional mutations
//! - **Positions**: [`position`] maps 1-based listing ranks to row ids
//!
//! ## Usage
//!
//! ```rust
//! use lazytodo::db::{db::Db, schema::SchemaSource, todos::Todos};
//! use lazytodo::libs::todo::{Category, Todo};
//!
//! let db = Db::open_in_memory("todos", &SchemaSource::Bundled)?;
//! let todos = Todos::new(&db);
//! todos.create(&Todo::new("Buy milk", Category::Shopping))?;
//! assert_eq!(todos.list()?.len(), 1);
//! # Ok::<(), lazytodo::libs::error::ServiceError>(())
//! ```

pub mod condition;
pub mod db;
pub mod error;
pub mod position;
pub mod schema;
pub mod todos;
pub mod users;

/// Result of an insert-if-absent operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new row was inserted with this id.
    Created(i64),
    /// A row with the same natural key exists; nothing was written.
    AlreadyExists,
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}
