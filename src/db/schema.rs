//! Side-loaded schema initialization.
//!
//! The gateway never defines tables itself. When a store is opened and its
//! table is missing, the script named `create_<name>_db.sql` is executed. The
//! script comes either from a caller-supplied directory or from the copies
//! shipped in the crate's `sql/` directory.

use super::error::{StorageError, StorageResult};
use rusqlite::{params, Connection};
use std::fs;
use std::path::PathBuf;

const BUNDLED_SCRIPTS: &[(&str, &str)] = &[
    ("todos", include_str!("../../sql/create_todos_db.sql")),
    ("users", include_str!("../../sql/create_users_db.sql")),
];

const SELECT_TABLE: &str = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";

/// Where schema scripts are looked up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchemaSource {
    /// Scripts compiled into the binary.
    #[default]
    Bundled,
    /// A directory containing `create_<name>_db.sql` files.
    Dir(PathBuf),
}

impl SchemaSource {
    pub fn script_name(name: &str) -> String {
        format!("create_{}_db.sql", name)
    }

    /// Returns the script text for the store `name`.
    pub fn script(&self, name: &str) -> StorageResult<String> {
        match self {
            SchemaSource::Bundled => BUNDLED_SCRIPTS
                .iter()
                .find(|(store, _)| *store == name)
                .map(|(_, sql)| sql.to_string())
                .ok_or_else(|| StorageError::Initialization(format!("no bundled script {}", Self::script_name(name)))),
            SchemaSource::Dir(dir) => {
                let path = dir.join(Self::script_name(name));
                fs::read_to_string(&path).map_err(|e| StorageError::Initialization(format!("{}: {}", path.display(), e)))
            }
        }
    }
}

pub fn table_exists(conn: &Connection, table: &str) -> StorageResult<bool> {
    let count: i64 = conn
        .query_row(SELECT_TABLE, params![table], |row| row.get(0))
        .map_err(|e| StorageError::operation("Check database existence", e))?;
    Ok(count > 0)
}

/// Runs the schema script for `name` unless a table of that name exists.
///
/// Returns `true` when the script was executed.
pub fn ensure(conn: &Connection, name: &str, source: &SchemaSource) -> StorageResult<bool> {
    if table_exists(conn, name)? {
        tracing::info!(store = name, "Database exists and checked");
        return Ok(false);
    }

    tracing::warn!(store = name, "Table does not exist, initializing schema");
    let sql = source.script(name)?;
    conn.execute_batch(&sql).map_err(|e| StorageError::Initialization(e.to_string()))?;

    if !table_exists(conn, name)? {
        return Err(StorageError::Initialization(format!(
            "{} did not create table '{}'",
            SchemaSource::script_name(name),
            name
        )));
    }

    tracing::info!(store = name, "Database initialized successfully");
    Ok(true)
}
