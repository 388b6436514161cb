//! Configuration management for the lazytodo application.
//!
//! Settings are kept as pretty-printed JSON in the per-user application
//! directory resolved by [`DataStorage`]. A missing file means "all defaults",
//! so the tool works without any setup; `lazytodo init` walks through every
//! setting interactively.
//!
//! ## Sections
//!
//! - **storage**: where the `.db` files live and where schema scripts are read from
//! - **seed**: the rows inserted when a listing finds an empty table
//! - **log**: tracing level and an optional log file
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use lazytodo::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.seed.welcome_task = "Plan the week".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::user::NewUser;
use crate::db::schema::SchemaSource;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_WELCOME_TASK: &str = "Welcome to lazytodo!";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StorageConfig {
    /// Directory holding `todos.db` and `users.db`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_dir: Option<PathBuf>,

    /// Directory with `create_<name>_db.sql` scripts; bundled scripts when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn db_dir(&self) -> PathBuf {
        self.db_dir.clone().unwrap_or_else(|| DataStorage::new().db_dir())
    }

    pub fn schema_source(&self) -> SchemaSource {
        match &self.schema_dir {
            Some(dir) => SchemaSource::Dir(dir.clone()),
            None => SchemaSource::Bundled,
        }
    }
}

/// User inserted when the user list is empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AdminConfig {
    pub username: String,
    pub email: String,
    pub age: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        AdminConfig {
            username: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            age: 100,
            phone: None,
        }
    }
}

impl AdminConfig {
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            username: self.username.clone(),
            email: self.email.clone(),
            age: self.age,
            phone: self.phone.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeedConfig {
    /// Task inserted when the task list is empty.
    pub welcome_task: String,

    #[serde(default)]
    pub admin: AdminConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            welcome_task: DEFAULT_WELCOME_TASK.to_string(),
            admin: AdminConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub level: String,

    /// Log lines are appended here in addition to the console when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub seed: SeedConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive setup wizard; current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleStorage);
        let db_dir: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDbDir.to_string())
            .default(current.storage.db_dir().display().to_string())
            .interact_text()?;
        let schema_dir: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptSchemaDir.to_string())
            .default(current.storage.schema_dir.as_ref().map(|dir| dir.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        msg_print!(Message::ConfigModuleSeed);
        let welcome_task: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptWelcomeTask.to_string())
            .default(current.seed.welcome_task.clone())
            .interact_text()?;
        let admin_username: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptAdminUsername.to_string())
            .default(current.seed.admin.username.clone())
            .interact_text()?;
        let admin_email: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptAdminEmail.to_string())
            .default(current.seed.admin.email.clone())
            .validate_with(|input: &String| super::email::validate_and_normalize(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;
        let admin_age: i64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptAdminAge.to_string())
            .default(current.seed.admin.age)
            .interact_text()?;

        msg_print!(Message::ConfigModuleLog);
        let level: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptLogLevel.to_string())
            .default(current.log.level.clone())
            .interact_text()?;
        let log_file: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptLogFile.to_string())
            .default(current.log.file.as_ref().map(|file| file.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            storage: StorageConfig {
                db_dir: Some(PathBuf::from(db_dir)),
                schema_dir: non_empty_path(schema_dir),
            },
            seed: SeedConfig {
                welcome_task,
                admin: AdminConfig {
                    username: admin_username,
                    email: admin_email,
                    age: admin_age,
                    phone: current.seed.admin.phone,
                },
            },
            log: LogConfig {
                level,
                file: non_empty_path(log_file),
            },
        })
    }
}

fn non_empty_path(value: String) -> Option<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
