// src/main.rs
use clap::Parser;
use football_relay::cli::Args;
use football_relay::logging::setup_logging;
use football_relay::{AppError, Config, scoreboard, server};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (mut config, env_warnings) = Config::load_with_warnings(args.config.as_deref()).await?;
    if let Some(port) = args.port {
        config.port = port;
        config.validate()?;
    }

    if args.list_config {
        config.display();
        for warning in &env_warnings {
            println!("{warning}");
        }
        return Ok(());
    }

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!("Logs are written to {log_file_path}");

    for warning in &env_warnings {
        warn!("{warning}");
    }
    config.warn_missing_keys();

    if args.once {
        return scoreboard::run_once(&config, args.date).await;
    }

    server::serve(config).await
}
