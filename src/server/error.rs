use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::error::AppError;

/// Error returned by a route handler.
///
/// Clients only ever see the route's fixed message with a 500 status. The
/// underlying [`AppError`] is logged when the route error is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteError {
    message: &'static str,
}

impl RouteError {
    pub fn new(message: &'static str, cause: &AppError) -> Self {
        if cause.is_upstream_failure() {
            error!("{message}: upstream failure: {cause}");
        } else {
            error!("{message}: {cause}");
        }
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for RouteError {}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

/// Adapter for `map_err` that tags an [`AppError`] with a route's message.
pub fn fail_with(message: &'static str) -> impl FnOnce(AppError) -> RouteError {
    move |cause| RouteError::new(message, &cause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::messages;

    #[tokio::test]
    async fn test_route_error_is_500_with_fixed_body() {
        let cause = AppError::api_not_found("https://example.com/teams?id=1");
        let response = RouteError::new(messages::TEAM_INFO, &cause).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Failed to fetch team info"}));
    }

    #[test]
    fn test_fail_with_keeps_message() {
        let route_error = fail_with(messages::MATCHES)(AppError::network_timeout("u"));
        assert_eq!(route_error.message(), "Failed to fetch matches");
        assert_eq!(route_error.to_string(), "Failed to fetch matches");
    }
}
