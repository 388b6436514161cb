use super::condition::Condition;
use super::db::Db;
use super::position;
use super::CreateOutcome;
use crate::libs::config::AdminConfig;
use crate::libs::error::ServiceResult;
use crate::libs::user::{NewUser, User};
use rusqlite::types::Value;

pub const TABLE: &str = "users";
const USER_COLUMNS: [&str; 5] = ["id", "username", "email", "age", "phone"];

/// User service over the `users` store.
pub struct Users<'a> {
    db: &'a Db,
    admin: NewUser,
}

impl<'a> Users<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self::with_admin(db, AdminConfig::default().to_new_user())
    }

    /// Uses `admin` as the user inserted when a listing finds the table empty.
    pub fn with_admin(db: &'a Db, admin: NewUser) -> Self {
        Users { db, admin }
    }

    /// True when either the username or the email is already taken.
    pub fn exists(&self, username: &str, email: &str) -> ServiceResult<bool> {
        let taken = Condition::eq("username", username.to_string()).or(Condition::eq("email", email.to_string()));
        Ok(!self.db.fetch_where(TABLE, &taken, &["id"])?.is_empty())
    }

    /// Validates `user`, normalizes its email and inserts it unless taken.
    pub fn add(&self, user: &NewUser) -> ServiceResult<CreateOutcome> {
        let user = user.normalized()?;
        if self.exists(&user.username, &user.email)? {
            return Ok(CreateOutcome::AlreadyExists);
        }

        let id = self.db.insert(
            TABLE,
            &[
                ("username", Value::Text(user.username.clone())),
                ("email", Value::Text(user.email.clone())),
                ("age", Value::Integer(user.age)),
                ("phone", user.phone.clone().into()),
            ],
        )?;
        tracing::info!(id, username = %user.username, "User created");

        Ok(CreateOutcome::Created(id))
    }

    /// Every user in listing order; seeds the admin user when there are none.
    pub fn list(&self) -> ServiceResult<Vec<User>> {
        let mut rows = self.db.fetch_all(TABLE, &USER_COLUMNS)?;
        if rows.is_empty() {
            self.add(&self.admin)?;
            tracing::info!(username = %self.admin.username, "Admin user added to an empty list");
            rows = self.db.fetch_all(TABLE, &USER_COLUMNS)?;
        }

        let users = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| User::from_row(row, idx + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    pub fn count(&self) -> ServiceResult<usize> {
        Ok(self.db.row_count(TABLE)?)
    }

    pub fn resolve_index(&self, index: usize) -> ServiceResult<i64> {
        position::resolve(self.db, TABLE, index)
    }

    pub fn get_by_id(&self, id: i64) -> ServiceResult<Option<User>> {
        let rows = self.db.fetch_where(TABLE, &Condition::id(id), &USER_COLUMNS)?;
        match rows.first() {
            Some(row) => {
                let mut user = User::from_row(row, 0)?;
                user.position = None;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    pub fn delete_by_id(&self, id: i64) -> ServiceResult<bool> {
        Ok(self.db.delete(TABLE, id)?)
    }

    /// Deletes the user shown at `index`; returns its id.
    pub fn delete_at(&self, index: usize) -> ServiceResult<i64> {
        self.db.transaction(|_| {
            let id = self.resolve_index(index)?;
            self.delete_by_id(id)?;
            Ok(id)
        })
    }
}
