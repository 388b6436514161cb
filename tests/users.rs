#[cfg(test)]
mod tests {
    use lazytodo::db::db::Db;
    use lazytodo::db::schema::SchemaSource;
    use lazytodo::db::users::{Users, TABLE};
    use lazytodo::db::CreateOutcome;
    use lazytodo::libs::error::{ServiceError, ValidationError};
    use lazytodo::libs::user::NewUser;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct UsersTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for UsersTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(TABLE, temp_dir.path(), &SchemaSource::Bundled).unwrap();
            UsersTestContext { _temp_dir: temp_dir, db }
        }
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_add_normalizes_email(ctx: &mut UsersTestContext) {
        let users = Users::new(&ctx.db);

        let outcome = users.add(&NewUser::new("Alex", "Something@GMAIL.com", 40).with_phone(" 555-0100 ")).unwrap();
        let CreateOutcome::Created(id) = outcome else {
            panic!("user was not created");
        };

        let user = users.get_by_id(id).unwrap().unwrap();
        assert_eq!(user.username, "Alex");
        assert_eq!(user.email, "something@gmail.com");
        assert_eq!(user.age, 40);
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_duplicate_username_or_email(ctx: &mut UsersTestContext) {
        let users = Users::new(&ctx.db);
        assert!(users.add(&NewUser::new("Alex", "alex@example.com", 40)).unwrap().is_created());

        let same_username = users.add(&NewUser::new("Alex", "other@example.com", 30)).unwrap();
        assert_eq!(same_username, CreateOutcome::AlreadyExists);

        let same_email = users.add(&NewUser::new("Alexander", "ALEX@example.com", 30)).unwrap();
        assert_eq!(same_email, CreateOutcome::AlreadyExists);

        assert_eq!(users.count().unwrap(), 1);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_invalid_users_rejected_before_storage(ctx: &mut UsersTestContext) {
        let users = Users::new(&ctx.db);

        for email in ["alex.example.com", "alex@example", "@example.com", "al ex@example.com", "alex@example.c0m"] {
            let result = users.add(&NewUser::new("Alex", email, 40));
            assert!(
                matches!(result, Err(ServiceError::Validation(ValidationError::InvalidEmail { .. }))),
                "{} should be rejected",
                email
            );
        }

        let too_old = users.add(&NewUser::new("Alex", "alex@example.com", 151));
        assert!(matches!(too_old, Err(ServiceError::Validation(ValidationError::InvalidUser(_)))));

        let blank = users.add(&NewUser::new("  ", "alex@example.com", 40));
        assert!(matches!(blank, Err(ServiceError::Validation(ValidationError::InvalidUser(_)))));

        assert_eq!(users.count().unwrap(), 0);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_list_seeds_admin(ctx: &mut UsersTestContext) {
        let users = Users::new(&ctx.db);

        let list = users.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].username, "Admin");
        assert_eq!(list[0].email, "admin@example.com");
        assert_eq!(list[0].position, Some(1));

        assert_eq!(users.list().unwrap().len(), 1);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_list_uses_configured_admin(ctx: &mut UsersTestContext) {
        let users = Users::with_admin(&ctx.db, NewUser::new("root", "Root@Example.org", 30));

        let list = users.list().unwrap();
        assert_eq!(list[0].username, "root");
        assert_eq!(list[0].email, "root@example.org");
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_delete_at(ctx: &mut UsersTestContext) {
        let users = Users::new(&ctx.db);
        users.add(&NewUser::new("Arina5", "Arisha5@librem.com", 20)).unwrap();
        users.add(&NewUser::new("Dmitry", "morozovd@yandex.ru", 18)).unwrap();

        assert!(matches!(users.delete_at(0), Err(ServiceError::IndexOutOfRange { index: 0, count: 2 })));

        let id = users.delete_at(1).unwrap();
        assert!(users.get_by_id(id).unwrap().is_none());

        let remaining = users.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].username, "Dmitry");
        assert!(!users.delete_by_id(id).unwrap());
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_delete_at_follows_listing_order(ctx: &mut UsersTestContext) {
        let users = Users::new(&ctx.db);
        // Insertion order differs from the username index order.
        let CreateOutcome::Created(zed) = users.add(&NewUser::new("Zed", "zed@example.com", 30)).unwrap() else {
            panic!("user was not created");
        };
        let CreateOutcome::Created(amy) = users.add(&NewUser::new("Amy", "amy@example.com", 25)).unwrap() else {
            panic!("user was not created");
        };

        let listed: Vec<_> = users.list().unwrap().into_iter().map(|user| user.username).collect();
        assert_eq!(listed, vec!["Zed".to_string(), "Amy".to_string()]);
        assert_eq!(users.resolve_index(1).unwrap(), zed);
        assert_eq!(users.resolve_index(2).unwrap(), amy);

        assert_eq!(users.delete_at(1).unwrap(), zed);
        let remaining: Vec<_> = users.list().unwrap().into_iter().map(|user| user.username).collect();
        assert_eq!(remaining, vec!["Amy".to_string()]);
    }
}
