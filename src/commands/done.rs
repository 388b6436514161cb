use super::list;
use crate::{
    db::todos::{self, Todos},
    libs::{config::Config, messages::Message, todo::Status},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Position of the task in the list (starting at 1)
    index: usize,
}

/// Marks the task as done when `done` is true, as not done otherwise.
pub fn cmd(args: StatusArgs, done: bool, config: &Config) -> Result<()> {
    let Some(db) = super::open_store(todos::TABLE, config) else {
        return Ok(());
    };
    let todos = Todos::with_welcome(&db, &config.seed.welcome_task);

    let status = if done { Status::Done } else { Status::Undone };
    match todos.set_status_at(args.index, status) {
        Ok(_) if done => {
            msg_success!(Message::TaskMarkedDone(args.index));
        }
        Ok(_) => {
            msg_success!(Message::TaskMarkedUndone(args.index));
        }
        Err(e) => {
            super::report(e, Message::TaskNotFoundAtPosition, Message::TaskStatusFailed);
        }
    }

    list::show(&todos)
}
