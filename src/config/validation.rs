use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - If log file path is provided, it cannot be empty
/// - If log file path is provided, it must end in a file name (not `..` or a root)
pub fn validate_config(log_file_path: &Option<String>) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path {
        if log_path.trim().is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if Path::new(log_path).file_name().is_none() {
            return Err(AppError::config_error(format!(
                "Log file path '{log_path}' does not name a file"
            )));
        }
    }

    Ok(())
}
