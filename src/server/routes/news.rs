use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;

use crate::constants::messages;
use crate::data_fetcher::api;
use crate::server::error::{RouteError, fail_with};
use crate::server::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/football", get(football_news))
        .route("/league/{id}", get(league_news))
        .route("/team/{name}", get(team_news))
        .route("/player/{name}", get(player_news))
}

async fn football_news(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, RouteError> {
    api::fetch_football_news(&state.client, &state.config)
        .await
        .map(Json)
        .map_err(fail_with(messages::FOOTBALL_NEWS))
}

// Ids are taken as text so an unknown or non-numeric id still gets `[]`.
async fn league_news(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, RouteError> {
    api::fetch_league_news(&state.client, &state.config, &id)
        .await
        .map(Json)
        .map_err(fail_with(messages::LEAGUE_NEWS))
}

async fn team_news(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Value>>, RouteError> {
    api::fetch_team_news(&state.client, &state.config, &name)
        .await
        .map(Json)
        .map_err(fail_with(messages::TEAM_NEWS))
}

async fn player_news(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Value>>, RouteError> {
    api::fetch_player_news(&state.client, &state.config, &name)
        .await
        .map(Json)
        .map_err(fail_with(messages::PLAYER_NEWS))
}
