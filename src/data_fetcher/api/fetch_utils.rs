//! Generic HTTP fetching with provider credentials and error classification

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::SPORTS_API_KEY_HEADER;
use crate::error::AppError;

/// How a request authenticates against its provider.
#[derive(Clone, Copy)]
pub enum Credentials<'a> {
    /// API-Football key header
    SportsApiKey(&'a str),
    /// NewsAPI bearer token
    Bearer(&'a str),
}

impl Credentials<'_> {
    fn apply(self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::SportsApiKey(key) => request.header(SPORTS_API_KEY_HEADER, key),
            Credentials::Bearer(token) => request.bearer_auth(token),
        }
    }
}

/// Fetches `url` and parses the body as `T`.
///
/// Exactly one request is made. Network errors, non-2xx statuses and bodies
/// that do not parse as `T` all come back as upstream [`AppError`] variants:
/// - timeouts and connection failures map to the network variants
/// - 404, 429, other 4xx and 5xx map to their status-specific variants
/// - an empty body, a non-JSON body and JSON of the wrong shape are told apart
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `credentials` - Provider authentication to attach
#[instrument(skip(client, credentials))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    credentials: Credentials<'_>,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match credentials.apply(client.get(url)).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            debug!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
