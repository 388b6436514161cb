use super::list;
use crate::{
    db::todos::{self, Todos},
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Position of the task in the list (starting at 1)
    index: usize,
    /// New task name
    #[arg(required = true)]
    name: String,
}

pub fn cmd(args: UpdateArgs, config: &Config) -> Result<()> {
    let Some(db) = super::open_store(todos::TABLE, config) else {
        return Ok(());
    };
    let todos = Todos::with_welcome(&db, &config.seed.welcome_task);

    match todos.rename_at(args.index, &args.name) {
        Ok(_) => {
            msg_success!(Message::TaskUpdated(args.index));
        }
        Err(e) => {
            super::report(e, Message::TaskNotFoundAtPosition, Message::TaskUpdateFailed);
        }
    }

    list::show(&todos)
}
