use super::list;
use crate::{
    db::{
        todos::{self, Todos},
        CreateOutcome,
    },
    libs::{
        config::Config,
        messages::Message,
        todo::{Category, Todo},
    },
    msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Task name
    #[arg(required = true)]
    name: String,
    /// BACKLOG, MAINTENANCE, BIRTHDAY, READING, WATCHING or SHOPPING (case-insensitive)
    category: Option<String>,
}

pub fn cmd(args: NewArgs, config: &Config) -> Result<()> {
    let category = match args.category.as_deref().map(str::parse::<Category>).transpose() {
        Ok(category) => category.unwrap_or_default(),
        Err(e) => {
            msg_error!(Message::InvalidInput(e.to_string()));
            return Ok(());
        }
    };

    let Some(db) = super::open_store(todos::TABLE, config) else {
        return Ok(());
    };
    let todos = Todos::with_welcome(&db, &config.seed.welcome_task);

    let name = args.name.trim().to_string();
    match todos.create(&Todo::new(&name, category)) {
        Ok(CreateOutcome::Created(_)) => {
            msg_success!(Message::TaskCreated(name));
        }
        Ok(CreateOutcome::AlreadyExists) => {
            msg_warning!(Message::TaskAlreadyExists(name, category));
        }
        Err(e) => {
            super::report(e, Message::TaskNotFoundAtPosition, Message::TaskCreateFailed);
            return Ok(());
        }
    }

    list::show(&todos)
}
