use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use person_name::NameFormat;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Arguments that run a configuration command, in which case no name is needed.
const CONFIG_ARGS: [&str; 4] = [
    "list_config",
    "new_format",
    "new_log_file_path",
    "clear_log_file_path",
];

/// Returns true when any configuration command was requested.
/// Config commands run instead of name formatting.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config
        || args.new_format.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Person name formatter
///
/// Formats a first, optional middle, and last name as a full name,
/// a full name with middle initial, or initials.
///
/// A middle name that is missing or only whitespace is left out entirely,
/// so no extra spaces or periods appear in the output.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// First name.
    #[arg(
        short = 'f',
        long = "first",
        required_unless_present_any = CONFIG_ARGS,
        help_heading = "Name"
    )]
    pub first: Option<String>,

    /// Middle name. Optional; blank values are treated as missing.
    #[arg(short = 'm', long = "middle", help_heading = "Name")]
    pub middle: Option<String>,

    /// Last name.
    #[arg(
        short = 'L',
        long = "last",
        required_unless_present_any = CONFIG_ARGS,
        help_heading = "Name"
    )]
    pub last: Option<String>,

    /// Output format. Defaults to the configured format, or `full`.
    #[arg(short = 'F', long = "format", value_enum, help_heading = "Output Options")]
    pub format: Option<NameFormat>,

    /// Print all three formats, one per line.
    #[arg(
        short = 'a',
        long = "all",
        conflicts_with = "format",
        help_heading = "Output Options"
    )]
    pub all: bool,

    /// Print output as JSON.
    #[arg(short = 'j', long = "json", help_heading = "Output Options")]
    pub json: bool,

    /// Reject empty first or last names before formatting.
    #[arg(long = "strict", help_heading = "Output Options")]
    pub strict: bool,

    /// Set the default output format in config.
    #[arg(
        long = "set-format",
        value_enum,
        value_name = "FORMAT",
        help_heading = "Configuration"
    )]
    pub new_format: Option<NameFormat>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(
        long = "clear-log-file",
        conflicts_with = "new_log_file_path",
        help_heading = "Configuration"
    )]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
