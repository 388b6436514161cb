use crate::libs::todo::Category;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskAlreadyExists(String, Category),
    TaskCreateFailed(String),
    TasksFetchFailed(String),
    TasksHeader,
    TaskDeleted(usize),
    TaskDeleteFailed(String),
    TaskUpdated(usize),
    TaskUpdateFailed(String),
    TaskMarkedDone(usize),
    TaskMarkedUndone(usize),
    TaskStatusFailed(String),
    TaskNotFoundAtPosition(usize),
    WelcomeTaskAdded,

    // === USER MESSAGES ===
    UserCreated(String),
    UserAlreadyExists(String),
    UserCreateFailed(String),
    UsersFetchFailed(String),
    UsersHeader,
    UserDeleted(usize),
    UserDeleteFailed(String),
    UserNotFoundAtPosition(usize),
    AdminUserAdded,

    // === SAMPLE DATA MESSAGES ===
    SampleDataSeeded { tasks: usize, users: usize },
    SampleDataAlreadyPresent,

    // === VALIDATION MESSAGES ===
    InvalidInput(String),
    PositionOutOfRange { index: usize, count: usize },

    // === STORAGE MESSAGES ===
    StorageUnavailable(String),
    StoreOpened(String),
    LogFileUnavailable(String, String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleStorage,
    ConfigModuleSeed,
    ConfigModuleLog,

    // === PROMPTS ===
    PromptDbDir,
    PromptSchemaDir,
    PromptWelcomeTask,
    PromptAdminUsername,
    PromptAdminEmail,
    PromptAdminAge,
    PromptLogLevel,
    PromptLogFile,
}
