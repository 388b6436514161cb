use crate::{
    db::{
        users::{self, Users},
        CreateOutcome,
    },
    libs::{config::Config, messages::Message, user::NewUser, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Add a user
    Add {
        username: String,
        email: String,
        age: i64,
        #[arg(short, long)]
        phone: Option<String>,
    },
    /// List all users
    List,
    /// Delete the user at a position
    Delete {
        /// Position of the user in the list (starting at 1)
        index: usize,
    },
}

pub fn cmd(args: UserArgs, config: &Config) -> Result<()> {
    let Some(db) = super::open_store(users::TABLE, config) else {
        return Ok(());
    };
    let users = Users::with_admin(&db, config.seed.admin.to_new_user());

    match args.command {
        UserCommand::Add { username, email, age, phone } => handle_add(&users, username, email, age, phone),
        UserCommand::List => show(&users),
        UserCommand::Delete { index } => handle_delete(&users, index),
    }
}

fn handle_add(users: &Users, username: String, email: String, age: i64, phone: Option<String>) -> Result<()> {
    let mut user = NewUser::new(&username, &email, age);
    if let Some(phone) = phone {
        user = user.with_phone(&phone);
    }

    match users.add(&user) {
        Ok(CreateOutcome::Created(_)) => {
            msg_success!(Message::UserCreated(username.trim().to_string()));
        }
        Ok(CreateOutcome::AlreadyExists) => {
            msg_warning!(Message::UserAlreadyExists(username.trim().to_string()));
        }
        Err(e) => {
            super::report(e, Message::UserNotFoundAtPosition, Message::UserCreateFailed);
            return Ok(());
        }
    }

    show(users)
}

fn handle_delete(users: &Users, index: usize) -> Result<()> {
    match users.delete_at(index) {
        Ok(_) => {
            msg_success!(Message::UserDeleted(index));
        }
        Err(e) => {
            super::report(e, Message::UserNotFoundAtPosition, Message::UserDeleteFailed);
        }
    }

    show(users)
}

fn show(users: &Users) -> Result<()> {
    let was_empty = matches!(users.count(), Ok(0));

    match users.list() {
        Ok(list) => {
            if was_empty {
                msg_info!(Message::AdminUserAdded);
            }
            msg_print!(Message::UsersHeader, true);
            View::users(&list)?;
        }
        Err(e) => {
            msg_error!(Message::UsersFetchFailed(e.to_string()));
        }
    }

    Ok(())
}
