use super::todo::{format_timestamp, Todo};
use super::user::User;
use anyhow::Result;
use prettytable::{row, Table};

const NOT_AVAILABLE: &str = "N/A";

pub struct View {}

impl View {
    pub fn todos(todos: &[Todo]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "Task", "Category", "Date Added", "Date Completed", "Status"]);
        for todo in todos {
            table.add_row(row![
                todo.position.map(|p| p.to_string()).unwrap_or_default(),
                todo.name,
                todo.category,
                format_timestamp(&todo.created_at),
                todo.completed_at.as_ref().map(format_timestamp).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                todo.status.symbol()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "Username", "Email", "Age", "Phone"]);
        for user in users {
            table.add_row(row![
                user.position.map(|p| p.to_string()).unwrap_or_default(),
                user.username,
                user.email,
                user.age,
                user.phone.as_deref().unwrap_or(NOT_AVAILABLE)
            ]);
        }
        table.printstd();

        Ok(())
    }
}
