//! Football stats and news relay
//!
//! This library relays football data from API-Football and headlines from
//! NewsAPI behind a small JSON HTTP API. Most routes pass the provider's
//! payload through untouched. League standings are reshaped into a
//! `{ standings, leagueInfo }` snapshot and match details are assembled from
//! four concurrent provider queries.
//!
//! # Examples
//!
//! ```rust,no_run
//! use football_relay::data_fetcher::api::{create_http_client, fetch_league_standings};
//! use football_relay::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load(None).await?;
//!     let client = create_http_client(config.http_timeout_seconds)?;
//!
//!     let snapshot = fetch_league_standings(&client, &config, 39, Some(2023)).await?;
//!     println!("{} teams", snapshot.standings.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod scoreboard;
pub mod server;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{AggregatedMatch, FixtureSummary, LeagueInfo, LeagueSnapshot};
pub use error::AppError;
pub use server::{AppState, build_router, serve};
