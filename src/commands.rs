use crate::cli::Args;
use person_name::config::Config;
use person_name::error::AppError;
use person_name::{NameFormat, PersonName};
use serde::Serialize;
use tracing::{debug, info};

/// JSON shape for a single rendering.
#[derive(Debug, Serialize)]
struct SingleFormatOutput<'a> {
    format: NameFormat,
    name: &'a str,
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-format, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    update_config_at_path(&config_path, args).await?;
    info!("Config saved to {config_path}");
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the requested updates to the config file at `path` and saves it.
///
/// Starts from the stored file contents only, so environment overrides are never
/// persisted. A malformed or unreadable file is reported instead of being replaced.
async fn update_config_at_path(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load_file_or_default(path).await?;
    apply_config_updates(&mut config, args);

    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}

fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(new_format) = args.new_format {
        config.default_format = new_format;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}

/// Builds the person from the command line, honoring `--strict`.
pub fn person_from_args(args: &Args) -> Result<PersonName, AppError> {
    let first = args.first.as_deref().unwrap_or_default();
    let last = args.last.as_deref().unwrap_or_default();
    let middle = args.middle.as_deref();

    if args.strict {
        PersonName::try_new(first, middle, last)
    } else {
        Ok(PersonName::new(first, middle, last))
    }
}

/// Renders the requested output for a person without printing it.
///
/// - `--all` renders every format, one per line
/// - otherwise `--format`, falling back to the configured default format
/// - `--json` switches either form to JSON
pub fn render_output(
    person: &PersonName,
    args: &Args,
    config: &Config,
) -> Result<String, AppError> {
    if args.all {
        let formatted = person.formatted()?;
        return if args.json {
            Ok(serde_json::to_string_pretty(&formatted)?)
        } else {
            Ok(format!(
                "{}\n{}\n{}",
                formatted.full_name, formatted.full_name_with_middle_initial, formatted.initials
            ))
        };
    }

    let format = args.format.unwrap_or(config.default_format);
    debug!("Rendering name as {format}");
    let name = person.format(format)?;

    if args.json {
        Ok(serde_json::to_string_pretty(&SingleFormatOutput {
            format,
            name: &name,
        })?)
    } else {
        Ok(name)
    }
}

/// Handles name formatting: builds the person, renders it and prints the result.
pub fn handle_format_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let person = person_from_args(args)?;
    let output = render_output(&person, args, config)?;
    println!("{output}");
    Ok(())
}
