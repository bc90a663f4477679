use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Store(#[from] studyhall_db::StoreError),

    /// Database could not be opened or migrated
    #[error("Database error: {0}")]
    Schema(#[from] studyhall_db::schema::SchemaError),

    /// Question bank could not be read
    #[error("{0}")]
    Bank(#[from] studyhall_quiz::BankError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] studyhall_quiz::ConfigError),
}
