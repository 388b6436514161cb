use crate::{
    db::{
        todos::{self, Todos},
        users::{self, Users},
    },
    libs::{
        config::Config,
        messages::Message,
        todo::{Category, Todo},
        user::NewUser,
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;

const SAMPLE_TODOS: [(&str, Category); 5] = [
    ("Buy groceries", Category::Shopping),
    ("Read 'Clean Code'", Category::Reading),
    ("Watch Rust tutorial", Category::Watching),
    ("Schedule car maintenance", Category::Maintenance),
    ("Plan birthday party", Category::Birthday),
];

const SAMPLE_USERS: [(&str, &str, i64); 3] = [
    ("Arina5", "Arisha5@librem.com", 20),
    ("Alex", "something@gmail.com", 40),
    ("Dmitry", "morozovd@yandex.ru", 18),
];

/// Creates the sample rows that are not present yet.
pub fn cmd(config: &Config) -> Result<()> {
    let (Some(todos_db), Some(users_db)) = (super::open_store(todos::TABLE, config), super::open_store(users::TABLE, config)) else {
        return Ok(());
    };
    let todos = Todos::with_welcome(&todos_db, &config.seed.welcome_task);
    let users = Users::with_admin(&users_db, config.seed.admin.to_new_user());

    let mut tasks_added = 0;
    for (name, category) in SAMPLE_TODOS {
        match todos.create(&Todo::new(name, category)) {
            Ok(outcome) if outcome.is_created() => tasks_added += 1,
            Ok(_) => {}
            Err(e) => {
                msg_error!(Message::TaskCreateFailed(e.to_string()));
            }
        }
    }

    let mut users_added = 0;
    for (username, email, age) in SAMPLE_USERS {
        match users.add(&NewUser::new(username, email, age)) {
            Ok(outcome) if outcome.is_created() => users_added += 1,
            Ok(_) => {}
            Err(e) => {
                msg_error!(Message::UserCreateFailed(e.to_string()));
            }
        }
    }

    if tasks_added == 0 && users_added == 0 {
        msg_info!(Message::SampleDataAlreadyPresent);
    } else {
        msg_success!(Message::SampleDataSeeded {
            tasks: tasks_added,
            users: users_added,
        });
    }

    Ok(())
}
