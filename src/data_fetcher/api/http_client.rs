//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates the HTTP client shared by every upstream call.
///
/// The client pools connections per host. No request timeout is applied
/// unless one is configured, so an unresponsive upstream is bounded only by
/// the caller giving up.
///
/// # Arguments
/// * `timeout_seconds` - Optional overall request timeout
pub fn create_http_client(timeout_seconds: Option<u64>) -> Result<Client, reqwest::Error> {
    let mut builder =
        Client::builder().pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST);

    if let Some(seconds) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }

    builder.build()
}

/// Creates an HTTP client for testing with a short timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(Some(10)).expect("Failed to create test HTTP client")
}
