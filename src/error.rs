use crate::person_name::NamePart;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Caller contract violations
    #[error("Cannot take an initial from an empty {part} name")]
    EmptyNamePart { part: NamePart },

    #[error("Unknown name format: '{0}' (expected full, middle-initial or initials)")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an empty name part error for the given slot
    pub fn empty_name_part(part: NamePart) -> Self {
        Self::EmptyNamePart { part }
    }

    /// Create an invalid format error from the rejected input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat(input.into())
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error was caused by the caller's input rather than the environment
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AppError::EmptyNamePart { .. } | AppError::InvalidFormat(_)
        )
    }
}
