use super::error::ValidationError;
use crate::db::db::Row;
use crate::db::error::{StorageError, StorageResult};
use chrono::{Local, NaiveDateTime, SubsecRound};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text form of every persisted timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Backlog,
    Maintenance,
    Birthday,
    Reading,
    Watching,
    Shopping,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Backlog,
        Category::Maintenance,
        Category::Birthday,
        Category::Reading,
        Category::Watching,
        Category::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Backlog => "BACKLOG",
            Category::Maintenance => "MAINTENANCE",
            Category::Birthday => "BIRTHDAY",
            Category::Reading => "READING",
            Category::Watching => "WATCHING",
            Category::Shopping => "SHOPPING",
        }
    }

    pub fn names() -> String {
        Self::ALL.iter().map(Category::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| ValidationError::InvalidCategory {
                value: s.to_string(),
                options: Self::names(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for Value {
    fn from(category: Category) -> Self {
        Value::Text(category.as_str().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Undone = 0,
    Done = 1,
}

impl Status {
    pub fn as_i64(&self) -> i64 {
        *self as i64
    }

    /// Marker shown in the status column of the task table.
    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Undone => "📌",
            Status::Done => "Completed",
        }
    }
}

impl TryFrom<i64> for Status {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Status::Undone),
            1 => Ok(Status::Done),
            other => Err(ValidationError::InvalidStatus(other)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Undone => f.write_str("UNDONE"),
            Status::Done => f.write_str("DONE"),
        }
    }
}

impl From<Status> for Value {
    fn from(status: Status) -> Self {
        Value::Integer(status.as_i64())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: Option<i64>,
    pub name: String,
    pub category: Category,
    pub created_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    pub status: Status,
    /// 1-based rank in the listing it was fetched with. Never stored.
    pub position: Option<usize>,
}

impl Todo {
    pub fn new(name: &str, category: Category) -> Self {
        Todo {
            id: None,
            name: name.to_string(),
            category,
            created_at: now(),
            completed_at: None,
            status: Status::Undone,
            position: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    pub fn from_row(row: &Row, position: usize) -> StorageResult<Self> {
        let category: String = row.get_as("category")?;
        let status: i64 = row.get_as("status")?;
        let created_at: String = row.get_as("created_at")?;
        let completed_at: Option<String> = row.get_as("completed_at")?;

        Ok(Todo {
            id: Some(row.get_as("id")?),
            name: row.get_as("name")?,
            category: category.parse().map_err(|e| StorageError::decode("category", e))?,
            created_at: parse_timestamp("created_at", &created_at)?,
            completed_at: completed_at.map(|value| parse_timestamp("completed_at", &value)).transpose()?,
            status: Status::try_from(status).map_err(|e| StorageError::decode("status", e))?,
            position: Some(position),
        })
    }
}

/// Current local time truncated to whole seconds, the precision it is stored with.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(column: &str, value: &str) -> StorageResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| StorageError::decode(column, e))
}
