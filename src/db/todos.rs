use super::condition::Condition;
use super::db::Db;
use super::position;
use super::CreateOutcome;
use crate::libs::config::DEFAULT_WELCOME_TASK;
use crate::libs::error::{ServiceResult, ValidationError};
use crate::libs::todo::{format_timestamp, now, Category, Status, Todo};
use rusqlite::types::Value;

pub const TABLE: &str = "todos";
const TODO_COLUMNS: [&str; 6] = ["id", "name", "category", "created_at", "completed_at", "status"];

/// Task service over the `todos` store.
pub struct Todos<'a> {
    db: &'a Db,
    welcome: String,
}

impl<'a> Todos<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self::with_welcome(db, DEFAULT_WELCOME_TASK)
    }

    /// Uses `welcome` as the task inserted when a listing finds the table empty.
    /// A blank `welcome` falls back to [`DEFAULT_WELCOME_TASK`].
    pub fn with_welcome(db: &'a Db, welcome: &str) -> Self {
        let welcome = match non_blank(welcome) {
            Ok(welcome) => welcome,
            Err(_) => DEFAULT_WELCOME_TASK,
        };

        Todos {
            db,
            welcome: welcome.to_string(),
        }
    }

    pub fn exists(&self, name: &str, category: Category) -> ServiceResult<bool> {
        let natural_key = Condition::eq("name", name.to_string()).and(Condition::eq("category", category));
        Ok(!self.db.fetch_where(TABLE, &natural_key, &["id"])?.is_empty())
    }

    /// Inserts `todo` unless a task with the same name and category exists.
    pub fn create(&self, todo: &Todo) -> ServiceResult<CreateOutcome> {
        let name = non_blank(&todo.name)?;
        if self.exists(name, todo.category)? {
            return Ok(CreateOutcome::AlreadyExists);
        }

        let id = self.db.insert(
            TABLE,
            &[
                ("name", Value::Text(name.to_string())),
                ("category", todo.category.into()),
                ("created_at", Value::Text(format_timestamp(&todo.created_at))),
                ("completed_at", todo.completed_at.as_ref().map(format_timestamp).into()),
                ("status", todo.status.into()),
            ],
        )?;
        tracing::info!(id, name, category = %todo.category, "Task created");

        Ok(CreateOutcome::Created(id))
    }

    /// Every task in listing order; seeds the welcome task when there are none.
    pub fn list(&self) -> ServiceResult<Vec<Todo>> {
        let mut rows = self.db.fetch_all(TABLE, &TODO_COLUMNS)?;
        if rows.is_empty() {
            self.create(&Todo::new(&self.welcome, Category::default()))?;
            tracing::info!(name = %self.welcome, "Welcome task added to an empty list");
            rows = self.db.fetch_all(TABLE, &TODO_COLUMNS)?;
        }

        let todos = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| Todo::from_row(row, idx + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(todos)
    }

    pub fn count(&self) -> ServiceResult<usize> {
        Ok(self.db.row_count(TABLE)?)
    }

    pub fn resolve_index(&self, index: usize) -> ServiceResult<i64> {
        position::resolve(self.db, TABLE, index)
    }

    pub fn get_by_id(&self, id: i64) -> ServiceResult<Option<Todo>> {
        let rows = self.db.fetch_where(TABLE, &Condition::id(id), &TODO_COLUMNS)?;
        match rows.first() {
            Some(row) => {
                let mut todo = Todo::from_row(row, 0)?;
                todo.position = None;
                Ok(Some(todo))
            }
            None => Ok(None),
        }
    }

    pub fn delete_by_id(&self, id: i64) -> ServiceResult<bool> {
        Ok(self.db.delete(TABLE, id)?)
    }

    /// Renames the task `id`. A blank name is rejected without touching storage.
    pub fn rename_by_id(&self, id: i64, name: &str) -> ServiceResult<bool> {
        let name = non_blank(name)?;
        let affected = self.db.update(TABLE, &[("name", Value::Text(name.to_string()))], &Condition::id(id))?;
        Ok(affected > 0)
    }

    /// Sets the status of task `id`; setting the current status again succeeds.
    ///
    /// `completed_at` is stamped on the first transition to DONE and cleared
    /// when the task goes back to UNDONE.
    pub fn set_status(&self, id: i64, status: Status) -> ServiceResult<bool> {
        let Some(todo) = self.get_by_id(id)? else {
            return Ok(false);
        };

        let completed_at = match status {
            Status::Done => Some(todo.completed_at.unwrap_or_else(now)),
            Status::Undone => None,
        };
        let fields: [(&str, Value); 2] = [
            ("status", status.into()),
            ("completed_at", completed_at.as_ref().map(format_timestamp).into()),
        ];
        let affected = self.db.update(TABLE, &fields, &Condition::id(id))?;

        Ok(affected > 0)
    }

    /// Deletes the task shown at `index`; returns its id.
    pub fn delete_at(&self, index: usize) -> ServiceResult<i64> {
        self.db.transaction(|_| {
            let id = self.resolve_index(index)?;
            self.delete_by_id(id)?;
            Ok(id)
        })
    }

    pub fn rename_at(&self, index: usize, name: &str) -> ServiceResult<i64> {
        non_blank(name)?;
        self.db.transaction(|_| {
            let id = self.resolve_index(index)?;
            self.rename_by_id(id, name)?;
            Ok(id)
        })
    }

    pub fn set_status_at(&self, index: usize, status: Status) -> ServiceResult<i64> {
        self.db.transaction(|_| {
            let id = self.resolve_index(index)?;
            self.set_status(id, status)?;
            Ok(id)
        })
    }
}

fn non_blank(name: &str) -> Result<&str, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(name)
}
