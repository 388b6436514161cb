use super::condition::{validate_identifier, Condition};
use super::error::{StorageError, StorageResult};
use super::schema::{self, SchemaSource};
use crate::libs::config::Config;
use rusqlite::types::{FromSql, Value, ValueRef};
use rusqlite::{params, params_from_iter, Connection, Transaction, TransactionBehavior};
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_FILE_EXTENSION: &str = "db";

/// One fetched row as an ordered column → value mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new(fields: Vec<(String, Value)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.iter().find(|(name, _)| name == column).map(|(_, value)| value)
    }

    /// Reads `column` as `T`, failing when the column is absent or mistyped.
    pub fn get_as<T: FromSql>(&self, column: &str) -> StorageResult<T> {
        let value = self.get(column).ok_or_else(|| StorageError::decode(column, "no such column"))?;
        T::column_result(ValueRef::from(value)).map_err(|e| StorageError::decode(column, e))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// Storage gateway over a single SQLite store.
///
/// A store is named after the table it holds (`todos`, `users`); on open the
/// table is created from the side-loaded schema script when it is missing.
/// Every statement runs in autocommit mode unless wrapped in
/// [`Db::transaction`].
pub struct Db {
    conn: Connection,
    name: String,
    path: Option<PathBuf>,
}

impl Db {
    /// Opens (or creates) `<dir>/<name>.db`, creating `dir` when missing.
    pub fn open(name: &str, dir: &Path, schema: &SchemaSource) -> StorageResult<Db> {
        let name = validate_identifier(name)?;
        fs::create_dir_all(dir).map_err(|e| StorageError::Connection {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let path = dir.join(format!("{}.{}", name, DB_FILE_EXTENSION));
        let conn = Connection::open(&path).map_err(|e| StorageError::Connection {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Self::init(conn, name, Some(path), schema)
    }

    pub fn open_in_memory(name: &str, schema: &SchemaSource) -> StorageResult<Db> {
        let name = validate_identifier(name)?;
        let conn = Connection::open_in_memory().map_err(|e| StorageError::Connection {
            path: PathBuf::from(":memory:"),
            message: e.to_string(),
        })?;

        Self::init(conn, name, None, schema)
    }

    /// Opens the store `name` with the directory and schema source from `config`.
    pub fn from_config(name: &str, config: &Config) -> StorageResult<Db> {
        Self::open(name, &config.storage.db_dir(), &config.storage.schema_source())
    }

    fn init(conn: Connection, name: &str, path: Option<PathBuf>, schema: &SchemaSource) -> StorageResult<Db> {
        schema::ensure(&conn, name, schema)?;

        Ok(Db {
            conn,
            name: name.to_string(),
            path,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Appends one row and returns its assigned id.
    pub fn insert(&self, table: &str, fields: &[(&str, Value)]) -> StorageResult<i64> {
        let table = validate_identifier(table)?;
        let sql = if fields.is_empty() {
            format!("INSERT INTO {} DEFAULT VALUES", table)
        } else {
            let columns = fields.iter().map(|(column, _)| validate_identifier(column)).collect::<StorageResult<Vec<_>>>()?;
            format!("INSERT INTO {} ({}) VALUES ({})", table, columns.join(", "), vec!["?"; fields.len()].join(", "))
        };

        self.conn
            .execute(&sql, params_from_iter(fields.iter().map(|(_, value)| value)))
            .map_err(|e| StorageError::operation("Insert", e))?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Fetches every row in insertion (rowid) order. An empty `columns` slice
    /// selects all columns.
    pub fn fetch_all(&self, table: &str, columns: &[&str]) -> StorageResult<Vec<Row>> {
        self.select(table, columns, None)
    }

    pub fn fetch_where(&self, table: &str, condition: &Condition, columns: &[&str]) -> StorageResult<Vec<Row>> {
        self.select(table, columns, Some(condition))
    }

    fn select(&self, table: &str, columns: &[&str], condition: Option<&Condition>) -> StorageResult<Vec<Row>> {
        let table = validate_identifier(table)?;
        let columns_sql = if columns.is_empty() {
            "*".to_string()
        } else {
            columns.iter().map(|column| validate_identifier(column)).collect::<StorageResult<Vec<_>>>()?.join(", ")
        };

        let (operation, where_sql, values) = match condition {
            Some(condition) => {
                let (sql, values) = condition.compile()?;
                ("Fetch with condition", format!(" WHERE {}", sql), values)
            }
            None => ("Fetch", String::new(), Vec::new()),
        };

        // Listings and position resolution both rely on rowid order.
        let sql = format!("SELECT {} FROM {}{} ORDER BY rowid", columns_sql, table, where_sql);
        let mut stmt = self.conn.prepare(&sql).map_err(|e| StorageError::operation(operation, e))?;
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let row_iter = stmt
            .query_map(params_from_iter(values.iter()), |row| {
                let mut fields = Vec::with_capacity(names.len());
                for (idx, name) in names.iter().enumerate() {
                    fields.push((name.clone(), row.get::<_, Value>(idx)?));
                }
                Ok(Row::new(fields))
            })
            .map_err(|e| StorageError::operation(operation, e))?;

        let mut rows = Vec::new();
        for row in row_iter {
            rows.push(row.map_err(|e| StorageError::operation(operation, e))?);
        }

        Ok(rows)
    }

    /// Sets `fields` on every row matching `condition`; returns the affected count.
    pub fn update(&self, table: &str, fields: &[(&str, Value)], condition: &Condition) -> StorageResult<usize> {
        let table = validate_identifier(table)?;
        if fields.is_empty() {
            return Ok(0);
        }

        let assignments = fields
            .iter()
            .map(|(column, _)| validate_identifier(column).map(|column| format!("{} = ?", column)))
            .collect::<StorageResult<Vec<_>>>()?;
        let (where_sql, condition_values) = condition.compile()?;
        let sql = format!("UPDATE {} SET {} WHERE {}", table, assignments.join(", "), where_sql);

        let values = fields.iter().map(|(_, value)| value).chain(condition_values.iter());
        self.conn.execute(&sql, params_from_iter(values)).map_err(|e| StorageError::operation("Update", e))
    }

    /// Removes the row with `id`. A missing id is not an error.
    pub fn delete(&self, table: &str, id: i64) -> StorageResult<bool> {
        let table = validate_identifier(table)?;
        let affected = self
            .conn
            .execute(&format!("DELETE FROM {} WHERE id = ?1", table), params![id])
            .map_err(|e| StorageError::operation("Delete", e))?;

        if affected > 0 {
            tracing::info!(table, id, "Deletion of row is complete");
        }
        Ok(affected > 0)
    }

    pub fn row_count(&self, table: &str) -> StorageResult<usize> {
        let table = validate_identifier(table)?;
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .map_err(|e| StorageError::operation("Get table size", e))?;

        Ok(count as usize)
    }

    /// Runs `f` inside one transaction: committed on `Ok`, rolled back on `Err`.
    ///
    /// The write lock is taken when the transaction begins, so nothing can
    /// change the table between the reads and the writes of `f`.
    pub fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Db) -> Result<T, E>,
        E: From<StorageError>,
    {
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)
            .map_err(|e| StorageError::operation("Begin transaction", e))?;
        // Dropping `tx` on the error path rolls back.
        let result = f(self)?;
        tx.commit().map_err(|e| StorageError::operation("Commit", e))?;

        Ok(result)
    }
}

impl Drop for Db {
    fn drop(&mut self) {
        tracing::debug!(store = %self.name, "Connection closed successfully");
    }
}
