use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {reason} (got {value:?})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unexpected row shape: {message}")]
    RowShapeError { message: String },

    #[error("Selection index {index} is outside the {len} offered choices")]
    SelectionOutOfRange { index: usize, len: usize },
}

impl AppError {
    /// Errors raised by the relational store, as opposed to the prompt or
    /// configuration layers.
    pub fn is_store_error(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::RowShapeError { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::DatabaseError(sqlx::Error::Database(db)) => {
                if db.is_foreign_key_violation() {
                    format!("The change conflicts with existing records: {}", db.message())
                } else if db.is_unique_violation() {
                    format!("A record with that value already exists: {}", db.message())
                } else if db.is_check_violation() {
                    format!("The value was rejected by the database: {}", db.message())
                } else {
                    format!("The database rejected the statement: {}", db.message())
                }
            }
            AppError::DatabaseError(e) => format!("Could not reach the database: {}", e),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
