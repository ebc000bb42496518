//! Application-wide constants
//!
//! Keeps file names, environment variable names and logging defaults in one place.

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "person_name";

/// Name of the configuration file inside the app directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the log directory inside the app directory
pub const LOG_DIR_NAME: &str = "logs";

/// Default log file name
pub const LOG_FILE_NAME: &str = "person_name.log";

/// Default tracing directive when RUST_LOG does not override it
pub const DEFAULT_LOG_DIRECTIVE: &str = "person_name=info";

/// Environment variables that override config file values
pub mod env_vars {
    /// Overrides `default_format`
    pub const FORMAT: &str = "PERSON_NAME_FORMAT";

    /// Overrides `log_file_path`
    pub const LOG_FILE: &str = "PERSON_NAME_LOG_FILE";
}
