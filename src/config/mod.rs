use crate::constants::{LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use crate::person_name::NameFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Format used when no `--format` is given on the command line.
    #[serde(default)]
    pub default_format: NameFormat,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `PERSON_NAME_FORMAT` - Override default format (full, middle-initial, initials)
    /// - `PERSON_NAME_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable, malformed or invalid
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = Config::load_file_or_default(&config_path).await?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads only what is stored in the file at `path`, without environment overrides.
    /// Falls back to defaults when the file does not exist; read and parse errors propagate.
    pub async fn load_file_or_default(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Config::load_from_path(path).await
        } else {
            debug!("No config file at {path}, using defaults");
            Ok(Config::default())
        }
    }

    /// Lists the `PERSON_NAME_*` environment variables that are currently set,
    /// as `(name, value)` pairs.
    pub fn active_env_overrides() -> Vec<(&'static str, String)> {
        [env_vars::FORMAT, env_vars::LOG_FILE]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok().map(|value| (name, value)))
            .collect()
    }

    /// Applies `PERSON_NAME_*` environment variable overrides.
    /// Unparsable format values are ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(format) = std::env::var(env_vars::FORMAT) {
            match format.parse::<NameFormat>() {
                Ok(format) => self.default_format = format,
                Err(e) => warn!("Ignoring {}: {e}", env_vars::FORMAT),
            }
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and the settings stored in the file
    /// - Lists active environment overrides separately
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let overrides = Config::active_env_overrides();

        if Path::new(&config_path).exists() {
            let config = Config::load_from_path(&config_path).await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Default Format:");
            println!("{}", config.default_format);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        if !overrides.is_empty() {
            println!("────────────────────────────────────");
            println!("Environment Overrides (this run only):");
            for (name, value) in &overrides {
                println!("{name}={value}");
            }
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
