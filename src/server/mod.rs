//! Inbound HTTP surface.
//!
//! Football routes live under `/api/football`, news routes under
//! `/api/news`. Every route is a `GET` that answers with JSON. Handlers
//! never let an upstream error through: each one answers 500 with its own
//! fixed message instead.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;

pub use error::RouteError;
pub use state::AppState;

/// Builds the full application router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::api_router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> axum::Json<Value> {
    axum::Json(json!({ "status": "ok" }))
}

/// Binds `0.0.0.0:<port>` and serves until Ctrl+C.
pub async fn serve(config: Config) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config)?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::server_error(format!("failed to bind {addr}: {e}")))?;

    info!("Football relay listening on http://{addr}");

    serve_on(listener, state).await
}

/// Serves the router on an already bound listener until Ctrl+C.
pub async fn serve_on(listener: TcpListener, state: Arc<AppState>) -> Result<(), AppError> {
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::server_error(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {e}");
        // Without a signal handler keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, gracefully stopping");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    async fn spawn_app(config: Config) -> String {
        let state = AppState::new(config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn config_for(mock_server: &MockServer) -> Config {
        Config {
            sports_api_key: "test-key".to_string(),
            news_api_key: "news-key".to_string(),
            sports_api_base_url: mock_server.uri(),
            news_api_base_url: mock_server.uri(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_health() {
        let mock_server = MockServer::start().await;
        let base = spawn_app(config_for(&mock_server)).await;

        let body: Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_team_route_relays_first_team() {
        let mock_server = MockServer::start().await;
        let base = spawn_app(config_for(&mock_server)).await;

        Mock::given(method("GET"))
            .and(path("/teams"))
            .and(query_param("id", "33"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": [{"team": {"id": 33, "name": "Manchester United"}}]
            })))
            .mount(&mock_server)
            .await;

        let response = reqwest::get(format!("{base}/api/football/team/33")).await.unwrap();
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["team"]["name"], "Manchester United");
    }

    #[tokio::test]
    async fn test_upstream_failure_becomes_fixed_500() {
        let mock_server = MockServer::start().await;
        let base = spawn_app(config_for(&mock_server)).await;

        Mock::given(method("GET"))
            .and(path("/players/topscorers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let response = reqwest::get(format!("{base}/api/football/topscorers/39"))
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Failed to fetch top scorers"}));
    }

    #[tokio::test]
    async fn test_team_statistics_requires_league_id() {
        let mock_server = MockServer::start().await;
        let base = spawn_app(config_for(&mock_server)).await;

        let response = reqwest::get(format!("{base}/api/football/team/33/statistics"))
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let mock_server = MockServer::start().await;
        let base = spawn_app(config_for(&mock_server)).await;

        let response = reqwest::get(format!("{base}/api/football/nothing"))
            .await
            .unwrap();
        assert_eq!(response.status(), 404);
    }
}
