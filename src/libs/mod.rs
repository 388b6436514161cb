//! Core library modules for the lazytodo application.
//!
//! Holds the domain records, configuration, the per-user data directory,
//! the message catalog and the table views used by the commands.

pub mod config;
pub mod data_storage;
pub mod email;
pub mod error;
pub mod messages;
pub mod todo;
pub mod user;
pub mod view;
