use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Database connection timed out after {seconds}s")]
    TimeoutError { seconds: u64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Schema mismatch: expected {expected}, server selected {actual}")]
    SchemaMismatchError { expected: String, actual: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Database,
    System,
}

impl SupportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SupportError::TomlError(_)
            | SupportError::ConfigError { .. }
            | SupportError::MissingConfigError { .. }
            | SupportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SupportError::DatabaseError(_)
            | SupportError::TimeoutError { .. }
            | SupportError::SchemaMismatchError { .. } => ErrorCategory::Database,
            SupportError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Database => format!("Could not reach the preferences database: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SupportError::IoError(_) => "Check that the config file exists and is readable",
            SupportError::TomlError(_) => "Fix the TOML syntax in the config file",
            SupportError::DatabaseError(_) => {
                "Check that MySQL is running and the user may access the schema"
            }
            SupportError::TimeoutError { .. } => {
                "Check the database host/port or raise database.connect_timeout_secs"
            }
            SupportError::ConfigError { .. }
            | SupportError::MissingConfigError { .. }
            | SupportError::InvalidConfigValueError { .. } => {
                "Correct the reported value in the config file or environment"
            }
            SupportError::SchemaMismatchError { .. } => {
                "Check database.app_id, database.server_id and schema_template"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SupportError>;
