use crate::cli::{Args, is_oneshot_mode};
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Splits the configured log location into a directory and a file name.
///
/// `--log-file` wins over the config's `log_file_path`; without either the
/// log goes to the platform log directory.
pub fn resolve_log_location(args: &Args, config: &Config) -> (String, String) {
    match args.log_file.as_ref().or(config.log_file_path.as_ref()) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

fn env_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let directive = if debug {
        "football_relay=debug"
    } else {
        "football_relay=info"
    };
    let directive = directive
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging for the application.
///
/// - Server mode logs to stdout and to the log file
/// - One-shot modes without `--debug` log only to the file so their output stays clean
/// - The log file rolls daily and its directory is created when missing
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter(args.debug)?);

    let registry = tracing_subscriber::registry().with(file_layer);

    let installed = if is_oneshot_mode(args) && !args.debug {
        registry.try_init()
    } else {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter(args.debug)?),
            )
            .try_init()
    };
    installed
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_log_file_wins() {
        let args = Args::parse_from(["football_relay", "--log-file", "/var/log/relay/out.log"]);
        let config = Config {
            log_file_path: Some("/tmp/other.log".to_string()),
            ..Config::default()
        };

        let (dir, file) = resolve_log_location(&args, &config);
        assert_eq!(dir, "/var/log/relay");
        assert_eq!(file, "out.log");
    }

    #[test]
    fn test_config_log_file_and_bare_name() {
        let args = Args::parse_from(["football_relay"]);
        let config = Config {
            log_file_path: Some("relay.log".to_string()),
            ..Config::default()
        };

        let (dir, file) = resolve_log_location(&args, &config);
        assert_eq!(dir, ".");
        assert_eq!(file, "relay.log");
    }

    #[test]
    fn test_default_log_location() {
        let args = Args::parse_from(["football_relay"]);
        let (dir, file) = resolve_log_location(&args, &Config::default());
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, LOG_FILE_NAME);
    }
}
