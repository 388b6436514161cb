#[cfg(test)]
mod tests {
    use lazytodo::db::db::Db;
    use lazytodo::db::schema::SchemaSource;
    use lazytodo::db::todos::{Todos, TABLE};
    use lazytodo::db::CreateOutcome;
    use lazytodo::libs::config::DEFAULT_WELCOME_TASK;
    use lazytodo::libs::error::{ServiceError, ValidationError};
    use lazytodo::libs::todo::{Category, Status, Todo};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TodosTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for TodosTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(TABLE, temp_dir.path(), &SchemaSource::Bundled).unwrap();
            TodosTestContext { _temp_dir: temp_dir, db }
        }
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_create_is_idempotent(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);
        let todo = Todo::new("Buy milk", Category::Shopping);

        assert!(matches!(todos.create(&todo).unwrap(), CreateOutcome::Created(_)));
        assert_eq!(todos.create(&todo).unwrap(), CreateOutcome::AlreadyExists);
        assert_eq!(todos.count().unwrap(), 1);

        // Same name in another category is a different task.
        assert!(todos.create(&Todo::new("Buy milk", Category::Backlog)).unwrap().is_created());
        assert_eq!(todos.count().unwrap(), 2);
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_create_rejects_blank_name(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);

        let result = todos.create(&Todo::new("   ", Category::Backlog));
        assert!(matches!(result, Err(ServiceError::Validation(ValidationError::BlankName))));
        assert_eq!(todos.count().unwrap(), 0);
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_list_seeds_welcome_task_once(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);

        let list = todos.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, DEFAULT_WELCOME_TASK);
        assert_eq!(list[0].category, Category::Backlog);
        assert_eq!(list[0].position, Some(1));

        assert_eq!(todos.list().unwrap().len(), 1);
        assert_eq!(todos.count().unwrap(), 1);
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_list_uses_configured_welcome_task(ctx: &mut TodosTestContext) {
        let todos = Todos::with_welcome(&ctx.db, "Plan the week");

        let list = todos.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Plan the week");
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_resolve_index(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);
        let first = todos.create(&Todo::new("Buy milk", Category::Shopping)).unwrap();
        let second = todos.create(&Todo::new("Read a book", Category::Reading)).unwrap();

        assert_eq!(CreateOutcome::Created(todos.resolve_index(1).unwrap()), first);
        assert_eq!(CreateOutcome::Created(todos.resolve_index(2).unwrap()), second);

        assert!(matches!(todos.resolve_index(0), Err(ServiceError::IndexOutOfRange { index: 0, count: 2 })));
        assert!(matches!(todos.resolve_index(3), Err(ServiceError::IndexOutOfRange { index: 3, count: 2 })));
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_delete_by_id(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);
        let CreateOutcome::Created(id) = todos.create(&Todo::new("Buy milk", Category::Shopping)).unwrap() else {
            panic!("task was not created");
        };

        assert!(!todos.delete_by_id(id + 1).unwrap());
        assert!(todos.delete_by_id(id).unwrap());
        assert!(todos.get_by_id(id).unwrap().is_none());
        assert_eq!(todos.count().unwrap(), 0);
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_delete_at_shifts_positions(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);
        todos.create(&Todo::new("Buy milk", Category::Shopping)).unwrap();
        todos.create(&Todo::new("Read a book", Category::Reading)).unwrap();
        todos.create(&Todo::new("Fix the bike", Category::Maintenance)).unwrap();

        todos.delete_at(2).unwrap();

        let names: Vec<_> = todos.list().unwrap().into_iter().map(|todo| (todo.position, todo.name)).collect();
        assert_eq!(names, vec![(Some(1), "Buy milk".to_string()), (Some(2), "Fix the bike".to_string())]);

        assert!(matches!(todos.delete_at(3), Err(ServiceError::IndexOutOfRange { index: 3, count: 2 })));
        assert_eq!(todos.count().unwrap(), 2);
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_rename(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);
        todos.create(&Todo::new("Buy milk", Category::Shopping)).unwrap();

        let id = todos.rename_at(1, "  Buy oat milk ").unwrap();
        assert_eq!(todos.get_by_id(id).unwrap().unwrap().name, "Buy oat milk");

        let result = todos.rename_at(1, "");
        assert!(matches!(result, Err(ServiceError::Validation(ValidationError::BlankName))));
        assert!(matches!(todos.rename_by_id(id, " \t"), Err(ServiceError::Validation(ValidationError::BlankName))));
        assert_eq!(todos.get_by_id(id).unwrap().unwrap().name, "Buy oat milk");

        assert!(!todos.rename_by_id(id + 1, "Nothing here").unwrap());
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_buy_milk_scenario(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);
        todos.create(&Todo::new("Buy milk", Category::Shopping)).unwrap();

        let list = todos.list().unwrap();
        assert_eq!(list.len(), 1);
        let created = &list[0];
        assert_eq!(created.status, Status::Undone);
        assert!(created.completed_at.is_none());

        let id = todos.set_status_at(1, Status::Done).unwrap();
        assert_eq!(Some(id), created.id);

        let done = todos.get_by_id(id).unwrap().unwrap();
        assert!(done.is_done());
        assert_eq!(done.created_at, created.created_at);
        let completed_at = done.completed_at.expect("completion time is set");
        assert!(completed_at >= done.created_at);
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_set_status_is_idempotent(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);
        let CreateOutcome::Created(id) = todos.create(&Todo::new("Buy milk", Category::Shopping)).unwrap() else {
            panic!("task was not created");
        };

        assert!(todos.set_status(id, Status::Done).unwrap());
        let first = todos.get_by_id(id).unwrap().unwrap().completed_at;

        assert!(todos.set_status(id, Status::Done).unwrap());
        let second = todos.get_by_id(id).unwrap().unwrap();
        assert_eq!(second.status, Status::Done);
        assert_eq!(second.completed_at, first);

        assert!(todos.set_status(id, Status::Undone).unwrap());
        let undone = todos.get_by_id(id).unwrap().unwrap();
        assert_eq!(undone.status, Status::Undone);
        assert!(undone.completed_at.is_none());

        assert!(!todos.set_status(id + 1, Status::Done).unwrap());
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_positions_follow_listing_order(ctx: &mut TodosTestContext) {
        let todos = Todos::new(&ctx.db);
        // Insertion order differs from the (name, category) index order.
        let CreateOutcome::Created(zeta) = todos.create(&Todo::new("Zeta", Category::Backlog)).unwrap() else {
            panic!("task was not created");
        };
        let CreateOutcome::Created(alpha) = todos.create(&Todo::new("Alpha", Category::Backlog)).unwrap() else {
            panic!("task was not created");
        };

        let listed: Vec<_> = todos.list().unwrap().into_iter().map(|todo| (todo.position, todo.id)).collect();
        assert_eq!(listed, vec![(Some(1), Some(zeta)), (Some(2), Some(alpha))]);
        assert_eq!(todos.resolve_index(1).unwrap(), zeta);
        assert_eq!(todos.resolve_index(2).unwrap(), alpha);

        assert_eq!(todos.set_status_at(1, Status::Done).unwrap(), zeta);
        assert!(todos.get_by_id(zeta).unwrap().unwrap().is_done());
        assert!(!todos.get_by_id(alpha).unwrap().unwrap().is_done());

        assert_eq!(todos.rename_at(2, "Alpha two").unwrap(), alpha);
        assert_eq!(todos.get_by_id(zeta).unwrap().unwrap().name, "Zeta");

        assert_eq!(todos.delete_at(1).unwrap(), zeta);
        let names: Vec<_> = todos.list().unwrap().into_iter().map(|todo| todo.name).collect();
        assert_eq!(names, vec!["Alpha two".to_string()]);
    }

    #[test_context(TodosTestContext)]
    #[test]
    fn test_blank_welcome_task_uses_default(ctx: &mut TodosTestContext) {
        let todos = Todos::with_welcome(&ctx.db, "   ");

        let list = todos.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, DEFAULT_WELCOME_TASK);
    }

    #[test]
    fn test_category_and_status_parsing() {
        assert_eq!("shopping".parse::<Category>().unwrap(), Category::Shopping);
        assert_eq!(" Reading ".parse::<Category>().unwrap(), Category::Reading);
        assert!(matches!("groceries".parse::<Category>(), Err(ValidationError::InvalidCategory { .. })));

        assert_eq!(Status::try_from(1i64).unwrap(), Status::Done);
        assert_eq!(Status::try_from(0i64).unwrap(), Status::Undone);
        assert_eq!(Status::try_from(7i64), Err(ValidationError::InvalidStatus(7)));
    }
}
