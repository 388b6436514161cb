use crate::{
    db::todos::{self, Todos},
    libs::{config::Config, messages::Message, view::View},
    msg_error, msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd(config: &Config) -> Result<()> {
    let Some(db) = super::open_store(todos::TABLE, config) else {
        return Ok(());
    };
    show(&Todos::with_welcome(&db, &config.seed.welcome_task))
}

/// Prints the current task table. Mutating commands call this after their change.
pub fn show(todos: &Todos) -> Result<()> {
    let was_empty = matches!(todos.count(), Ok(0));

    match todos.list() {
        Ok(list) => {
            if was_empty {
                msg_info!(Message::WelcomeTaskAdded);
            }
            msg_print!(Message::TasksHeader, true);
            View::todos(&list)?;
        }
        Err(e) => {
            msg_error!(Message::TasksFetchFailed(e.to_string()));
        }
    }

    Ok(())
}
