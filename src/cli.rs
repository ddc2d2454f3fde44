use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

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

/// Whether the process prints something and exits instead of serving HTTP.
pub fn is_oneshot_mode(args: &Args) -> bool {
    args.once || args.list_config
}

/// Football stats and news relay
///
/// Serves football data from API-Football and headlines from NewsAPI over a
/// small JSON HTTP API with permissive CORS.
///
/// API keys are read from the config file or from the API_FOOTBALL_KEY and
/// NEWS_API_KEY environment variables.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Port to listen on. Overrides the config file and the PORT variable.
    #[arg(long, short = 'p', help_heading = "Server")]
    pub port: Option<u16>,

    /// Path to a TOML config file. Defaults to the platform config directory.
    #[arg(long = "config", short = 'c', value_name = "PATH", help_heading = "Configuration")]
    pub config: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Print the matches of one day grouped by league and exit.
    #[arg(short, long, help_heading = "Scoreboard")]
    pub once: bool,

    /// Date for --once in YYYY-MM-DD format. Defaults to today.
    #[arg(long = "date", short = 'd', requires = "once", help_heading = "Scoreboard")]
    pub date: Option<String>,

    /// Enable debug-level logging.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
