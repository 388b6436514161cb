//! # lazytodo
//!
//! A small command-line to-do list and user registry backed by local SQLite
//! stores.
//!
//! ## Features
//!
//! - **Tasks**: categorized tasks with creation and completion timestamps
//! - **Users**: user records with normalized, validated email addresses
//! - **Positional commands**: every mutation addresses rows by their rank in the
//!   current listing
//! - **Default rows**: empty lists are seeded with a welcome task or an admin user
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lazytodo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = lazytodo::libs::config::Config::read()?;
//!     Cli::menu(&config)
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
