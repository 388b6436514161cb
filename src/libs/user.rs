use super::email;
use super::error::ValidationError;
use crate::db::db::Row;
use crate::db::error::StorageResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub age: i64,
    pub phone: Option<String>,
    #[serde(skip)]
    pub position: Option<usize>,
}

impl User {
    pub fn from_row(row: &Row, position: usize) -> StorageResult<Self> {
        Ok(User {
            id: Some(row.get_as("id")?),
            username: row.get_as("username")?,
            email: row.get_as("email")?,
            age: row.get_as("age")?,
            phone: row.get_as("phone")?,
            position: Some(position),
        })
    }
}

/// A user as entered, before validation and email normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 64, message = "Username must be 1 to 64 characters long."))]
    pub username: String,
    pub email: String,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150."))]
    pub age: i64,
    #[validate(length(min = 3, max = 32, message = "Phone must be 3 to 32 characters long."))]
    pub phone: Option<String>,
}

impl NewUser {
    pub fn new(username: &str, email: &str, age: i64) -> Self {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            age,
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    /// Returns a copy with a trimmed username and a normalized email, or the
    /// first reason the input cannot be stored.
    pub fn normalized(&self) -> Result<NewUser, ValidationError> {
        let email = email::validate_and_normalize(&self.email)?;

        let username = self.username.trim();
        if username.is_empty() {
            return Err(ValidationError::InvalidUser("Username cannot be empty.".to_string()));
        }

        let normalized = NewUser {
            username: username.to_string(),
            email,
            age: self.age,
            phone: self.phone.as_deref().map(str::trim).filter(|phone| !phone.is_empty()).map(String::from),
        };
        normalized.validate().map_err(|e| ValidationError::InvalidUser(e.to_string()))?;

        Ok(normalized)
    }
}
