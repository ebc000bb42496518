// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_command};
use person_name::config::Config;
use person_name::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let loaded_config = Config::load().await;
    let config = match &loaded_config {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };

    // Keep the guard alive until exit so buffered log lines are flushed
    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::debug!("Logs are being written to: {log_file_path}");

    if let Err(e) = &loaded_config {
        tracing::warn!("Failed to load config, using defaults: {e}");
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_command(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    commands::handle_format_command(&args, &config)
}
