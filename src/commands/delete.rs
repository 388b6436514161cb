use super::list;
use crate::{
    db::todos::{self, Todos},
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Position of the task in the list (starting at 1)
    index: usize,
}

pub fn cmd(args: DeleteArgs, config: &Config) -> Result<()> {
    let Some(db) = super::open_store(todos::TABLE, config) else {
        return Ok(());
    };
    let todos = Todos::with_welcome(&db, &config.seed.welcome_task);

    match todos.delete_at(args.index) {
        Ok(_) => {
            msg_success!(Message::TaskDeleted(args.index));
        }
        Err(e) => {
            super::report(e, Message::TaskNotFoundAtPosition, Message::TaskDeleteFailed);
        }
    }

    list::show(&todos)
}
