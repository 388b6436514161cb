#[cfg(test)]
mod tests {
    use lazytodo::db::schema::SchemaSource;
    use lazytodo::libs::config::{Config, DEFAULT_LOG_LEVEL, DEFAULT_WELCOME_TASK};
    use lazytodo::libs::data_storage::{DataStorage, APP_NAME};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the per-user data directory at a temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.seed.welcome_task, DEFAULT_WELCOME_TASK);
        assert_eq!(config.seed.admin.username, "Admin");
        assert_eq!(config.seed.admin.email, "admin@example.com");
        assert_eq!(config.seed.admin.age, 100);
        assert_eq!(config.log.level, DEFAULT_LOG_LEVEL);
        assert!(config.log.file.is_none());
        assert_eq!(config.storage.schema_source(), SchemaSource::Bundled);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"seed": {"welcome_task": "Plan the week"}}"#).unwrap();
        assert_eq!(config.seed.welcome_task, "Plan the week");
        assert_eq!(config.seed.admin.username, "Admin");
        assert_eq!(config.log.level, DEFAULT_LOG_LEVEL);
        assert!(config.storage.db_dir.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_delete(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::new();
        assert!(storage.base_path().ends_with(APP_NAME));
        assert!(storage.db_dir().starts_with(storage.base_path()));

        // Missing file means defaults.
        assert!(!Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());

        let mut config = Config::default();
        config.storage.db_dir = Some(ctx.temp_dir.path().join("stores"));
        config.storage.schema_dir = Some(PathBuf::from("/opt/lazytodo/sql"));
        config.seed.welcome_task = "Plan the week".to_string();
        config.log.level = "info".to_string();
        config.save().unwrap();

        assert!(Config::path().unwrap().exists());
        let read = Config::read().unwrap();
        assert_eq!(read, config);
        assert_eq!(read.storage.db_dir(), ctx.temp_dir.path().join("stores"));
        assert_eq!(read.storage.schema_source(), SchemaSource::Dir(PathBuf::from("/opt/lazytodo/sql")));

        assert!(Config::delete().unwrap());
        assert!(!Config::path().unwrap().exists());
    }
}
