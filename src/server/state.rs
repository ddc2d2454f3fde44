use reqwest::Client;
use std::sync::Arc;

use crate::config::Config;
use crate::data_fetcher::api::create_http_client;
use crate::error::AppError;

/// Shared application state, passed to all route handlers via `axum::extract::State`.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, AppError> {
        let client = create_http_client(config.http_timeout_seconds)?;
        Ok(Arc::new(Self { config, client }))
    }
}
