//! Command-line interface of lazytodo.
//!
//! Every subcommand opens the stores it needs, runs one service call and
//! renders the outcome through the message macros. Service failures are
//! reported to the user and never abort the process.

pub mod delete;
pub mod done;
pub mod init;
pub mod list;
pub mod new;
pub mod seed;
pub mod update;
pub mod user;

use crate::{
    db::db::Db,
    libs::{config::Config, error::ServiceError, messages::Message},
    msg_debug, msg_error, msg_info,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create a task and show the list")]
    New(new::NewArgs),
    #[command(about = "Show the list of tasks")]
    List,
    #[command(about = "Delete the task at a position")]
    Delete(delete::DeleteArgs),
    #[command(about = "Rename the task at a position")]
    Update(update::UpdateArgs),
    #[command(about = "Mark the task at a position as done")]
    Done(done::StatusArgs),
    #[command(about = "Mark the task at a position as not done")]
    Undone(done::StatusArgs),
    #[command(about = "Manage users")]
    User(user::UserArgs),
    #[command(about = "Load sample tasks and users")]
    Seed,
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu(config: &Config) -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::New(args) => new::cmd(args, config),
            Commands::List => list::cmd(config),
            Commands::Delete(args) => delete::cmd(args, config),
            Commands::Update(args) => update::cmd(args, config),
            Commands::Done(args) => done::cmd(args, true, config),
            Commands::Undone(args) => done::cmd(args, false, config),
            Commands::User(args) => user::cmd(args, config),
            Commands::Seed => seed::cmd(config),
            Commands::Init(args) => init::cmd(args),
        }
    }
}

/// Opens the store `name`; on failure the reason is shown and `None` returned.
pub(crate) fn open_store(name: &str, config: &Config) -> Option<Db> {
    match Db::from_config(name, config) {
        Ok(db) => {
            msg_debug!(Message::StoreOpened(db.path().map(|path| path.display().to_string()).unwrap_or_default()));
            Some(db)
        }
        Err(e) => {
            msg_error!(Message::StorageUnavailable(e.to_string()));
            None
        }
    }
}

/// Shows a failed service call. `not_found` renders an out-of-range position,
/// `failed` a storage failure.
pub(crate) fn report(err: ServiceError, not_found: fn(usize) -> Message, failed: fn(String) -> Message) {
    match err {
        ServiceError::Validation(e) => {
            msg_error!(Message::InvalidInput(e.to_string()));
        }
        ServiceError::IndexOutOfRange { index, count } => {
            msg_error!(not_found(index));
            msg_info!(Message::PositionOutOfRange { index, count });
        }
        ServiceError::Storage(e) => {
            msg_error!(failed(e.to_string()));
        }
    }
}
