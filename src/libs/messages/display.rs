//! Display implementation for lazytodo application messages.
//!
//! Every user-facing sentence is defined here, in one match, so wording stays
//! consistent across commands and new variants must be given text explicitly.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // Task messages
            Message::TaskCreated(name) => format!("Task '{}' created successfully!", name),
            Message::TaskAlreadyExists(name, category) => format!("Task '{}' already exists in category {}", name, category),
            Message::TaskCreateFailed(error) => format!("Failed to create task: {}", error),
            Message::TasksFetchFailed(error) => format!("Failed to fetch tasks: {}", error),
            Message::TasksHeader => "To-Do List".to_string(),
            Message::TaskDeleted(index) => format!("Task at position {} deleted successfully!", index),
            Message::TaskDeleteFailed(error) => format!("Failed to delete task: {}", error),
            Message::TaskUpdated(index) => format!("Task at position {} updated successfully!", index),
            Message::TaskUpdateFailed(error) => format!("Failed to update task: {}", error),
            Message::TaskMarkedDone(index) => format!("Task at position {} marked as Done!", index),
            Message::TaskMarkedUndone(index) => format!("Task at position {} marked as not done", index),
            Message::TaskStatusFailed(error) => format!("Failed to change task status: {}", error),
            Message::TaskNotFoundAtPosition(index) => format!("No task found at position {}.", index),
            Message::WelcomeTaskAdded => "No tasks found. Welcome task has been added.".to_string(),

            // User messages
            Message::UserCreated(username) => format!("User '{}' added successfully!", username),
            Message::UserAlreadyExists(username) => format!("User '{}' already exists (same username or email)", username),
            Message::UserCreateFailed(error) => format!("Failed to add user: {}", error),
            Message::UsersFetchFailed(error) => format!("Failed to fetch users: {}", error),
            Message::UsersHeader => "Users".to_string(),
            Message::UserDeleted(index) => format!("User at position {} deleted successfully!", index),
            Message::UserDeleteFailed(error) => format!("Failed to delete user: {}", error),
            Message::UserNotFoundAtPosition(index) => format!("No user found at position {}.", index),
            Message::AdminUserAdded => "No users found. Admin user has been added.".to_string(),

            // Sample data messages
            Message::SampleDataSeeded { tasks, users } => format!("Sample data loaded: {} task(s), {} user(s) added", tasks, users),
            Message::SampleDataAlreadyPresent => "Sample data is already present, nothing was added".to_string(),

            // Validation messages
            Message::InvalidInput(reason) => format!("Error: {}", reason),
            Message::PositionOutOfRange { index, count } => match count {
                0 => format!("Position {} is out of range: the list is empty", index),
                _ => format!("Position {} is out of range: choose a position between 1 and {}", index, count),
            },

            // Storage messages
            Message::StorageUnavailable(error) => format!("Storage is unavailable: {}", error),
            Message::StoreOpened(path) => format!("Using store {}", path),
            Message::LogFileUnavailable(path, error) => format!("Cannot open log file {}: {}", path, error),

            // Configuration messages
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleStorage => "Storage".to_string(),
            Message::ConfigModuleSeed => "Default rows".to_string(),
            Message::ConfigModuleLog => "Logging".to_string(),

            // Prompts
            Message::PromptDbDir => "Database directory".to_string(),
            Message::PromptSchemaDir => "Schema script directory (empty for bundled scripts)".to_string(),
            Message::PromptWelcomeTask => "Task added to an empty list".to_string(),
            Message::PromptAdminUsername => "Admin username".to_string(),
            Message::PromptAdminEmail => "Admin email".to_string(),
            Message::PromptAdminAge => "Admin age".to_string(),
            Message::PromptLogLevel => "Log level (error, warn, info, debug, trace)".to_string(),
            Message::PromptLogFile => "Log file (empty to log to the console only)".to_string(),
        };

        write!(f, "{}", text)
    }
}
