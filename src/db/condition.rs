//! Parameterized filter predicates for the storage gateway.
//!
//! Filters are built as column/operator/value triples and compiled into a SQL
//! fragment with `?` placeholders plus the values to bind. User-supplied text
//! never becomes part of the statement itself, and column names must be plain
//! identifiers.
//!
//! ## Usage
//!
//! ```rust
//! use lazytodo::db::condition::Condition;
//!
//! let natural_key = Condition::eq("name", "Buy milk".to_string()).and(Condition::eq("category", "SHOPPING".to_string()));
//! let (sql, values) = natural_key.compile()?;
//! assert_eq!(sql, "(name = ? AND category = ?)");
//! assert_eq!(values.len(), 2);
//! # Ok::<(), lazytodo::db::error::StorageError>(())
//! ```

use super::error::{StorageError, StorageResult};
use rusqlite::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
}

impl Op {
    fn as_sql(&self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "<>",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Like => "LIKE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Predicate { column: String, op: Op, value: Value },
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl Condition {
    pub fn new(column: &str, op: Op, value: impl Into<Value>) -> Self {
        Condition::Predicate {
            column: column.to_string(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(column: &str, value: impl Into<Value>) -> Self {
        Self::new(column, Op::Eq, value)
    }

    pub fn ne(column: &str, value: impl Into<Value>) -> Self {
        Self::new(column, Op::Ne, value)
    }

    pub fn lt(column: &str, value: impl Into<Value>) -> Self {
        Self::new(column, Op::Lt, value)
    }

    pub fn le(column: &str, value: impl Into<Value>) -> Self {
        Self::new(column, Op::Le, value)
    }

    pub fn gt(column: &str, value: impl Into<Value>) -> Self {
        Self::new(column, Op::Gt, value)
    }

    pub fn ge(column: &str, value: impl Into<Value>) -> Self {
        Self::new(column, Op::Ge, value)
    }

    pub fn like(column: &str, pattern: impl Into<Value>) -> Self {
        Self::new(column, Op::Like, pattern)
    }

    /// Shorthand for the primary key predicate.
    pub fn id(id: i64) -> Self {
        Self::eq("id", id)
    }

    pub fn and(self, other: Condition) -> Self {
        match self {
            Condition::And(mut parts) => {
                parts.push(other);
                Condition::And(parts)
            }
            first => Condition::And(vec![first, other]),
        }
    }

    pub fn or(self, other: Condition) -> Self {
        match self {
            Condition::Or(mut parts) => {
                parts.push(other);
                Condition::Or(parts)
            }
            first => Condition::Or(vec![first, other]),
        }
    }

    /// Compiles the predicate tree into a SQL fragment and its bound values.
    ///
    /// Values are returned in placeholder order. An empty `And` compiles to
    /// `1` (always true) and an empty `Or` to `0` (always false).
    pub fn compile(&self) -> StorageResult<(String, Vec<Value>)> {
        let mut values = Vec::new();
        let sql = self.compile_into(&mut values)?;
        Ok((sql, values))
    }

    fn compile_into(&self, values: &mut Vec<Value>) -> StorageResult<String> {
        match self {
            Condition::Predicate { column, op, value } => {
                let column = validate_identifier(column)?;
                values.push(value.clone());
                Ok(format!("{} {} ?", column, op.as_sql()))
            }
            Condition::And(parts) => Self::join(parts, " AND ", "1", values),
            Condition::Or(parts) => Self::join(parts, " OR ", "0", values),
        }
    }

    fn join(parts: &[Condition], separator: &str, empty: &str, values: &mut Vec<Value>) -> StorageResult<String> {
        if parts.is_empty() {
            return Ok(empty.to_string());
        }
        let compiled = parts.iter().map(|part| part.compile_into(values)).collect::<StorageResult<Vec<_>>>()?;
        Ok(format!("({})", compiled.join(separator)))
    }
}

/// Accepts ASCII letters, digits and underscores, not starting with a digit.
pub fn validate_identifier(name: &str) -> StorageResult<&str> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    };

    if valid {
        Ok(name)
    } else {
        Err(StorageError::InvalidIdentifier(name.to_string()))
    }
}
