use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::constants::messages;
use crate::data_fetcher::api;
use crate::data_fetcher::models::{AggregatedMatch, LeagueSnapshot};
use crate::server::error::{RouteError, fail_with};
use crate::server::state::AppState;

// ── Query params ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeasonQuery {
    #[serde(default)]
    season: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct TeamStatisticsQuery {
    #[serde(rename = "leagueId")]
    league_id: u32,
    #[serde(default)]
    season: Option<i32>,
}

// ── Route definitions ────────────────────────────────────────────────────

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/matches", get(matches_by_date))
        .route("/standings/{league_id}", get(league_standings))
        .route("/topscorers/{league_id}", get(top_scorers))
        .route("/topassisters/{league_id}", get(top_assisters))
        .route("/team/{team_id}", get(team_info))
        .route("/team/{team_id}/squad", get(team_squad))
        .route("/team/{team_id}/statistics", get(team_statistics))
        .route("/team/{team_id}/coach", get(team_coach))
        .route("/team/{team_id}/transfers", get(team_transfers))
        .route("/team/{team_id}/lastfixtures", get(team_last_fixtures))
        .route("/match/{fixture_id}", get(match_details))
        .route("/player/{player_id}", get(player_details))
        .route("/player/{player_id}/transfers", get(player_transfers))
        .route("/player/{player_id}/trophies", get(player_trophies))
}

// ── Handlers ─────────────────────────────────────────────────────────────

async fn matches_by_date(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
) -> Result<Json<Value>, RouteError> {
    let date = q
        .date
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

    api::fetch_matches_by_date(&state.client, &state.config, &date)
        .await
        .map(Json)
        .map_err(fail_with(messages::MATCHES))
}

async fn league_standings(
    State(state): State<Arc<AppState>>,
    Path(league_id): Path<u32>,
    Query(q): Query<SeasonQuery>,
) -> Result<Json<LeagueSnapshot>, RouteError> {
    api::fetch_league_standings(&state.client, &state.config, league_id, q.season)
        .await
        .map(Json)
        .map_err(fail_with(messages::STANDINGS))
}

async fn top_scorers(
    State(state): State<Arc<AppState>>,
    Path(league_id): Path<u32>,
    Query(q): Query<SeasonQuery>,
) -> Result<Json<Value>, RouteError> {
    api::fetch_top_scorers(&state.client, &state.config, league_id, q.season)
        .await
        .map(Json)
        .map_err(fail_with(messages::TOP_SCORERS))
}

async fn top_assisters(
    State(state): State<Arc<AppState>>,
    Path(league_id): Path<u32>,
    Query(q): Query<SeasonQuery>,
) -> Result<Json<Value>, RouteError> {
    api::fetch_top_assisters(&state.client, &state.config, league_id, q.season)
        .await
        .map(Json)
        .map_err(fail_with(messages::TOP_ASSISTERS))
}

async fn team_info(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u32>,
) -> Result<Json<Value>, RouteError> {
    api::fetch_team_info(&state.client, &state.config, team_id)
        .await
        .map(Json)
        .map_err(fail_with(messages::TEAM_INFO))
}

async fn team_squad(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u32>,
) -> Result<Json<Vec<Value>>, RouteError> {
    api::fetch_team_squad(&state.client, &state.config, team_id)
        .await
        .map(Json)
        .map_err(fail_with(messages::TEAM_SQUAD))
}

async fn team_statistics(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u32>,
    Query(q): Query<TeamStatisticsQuery>,
) -> Result<Json<Value>, RouteError> {
    api::fetch_team_statistics(&state.client, &state.config, team_id, q.league_id, q.season)
        .await
        .map(Json)
        .map_err(fail_with(messages::TEAM_STATISTICS))
}

async fn team_coach(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u32>,
) -> Result<Json<Value>, RouteError> {
    api::fetch_team_coach(&state.client, &state.config, team_id)
        .await
        .map(Json)
        .map_err(fail_with(messages::TEAM_COACH))
}

async fn team_transfers(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u32>,
) -> Result<Json<Value>, RouteError> {
    api::fetch_team_transfers(&state.client, &state.config, team_id)
        .await
        .map(Json)
        .map_err(fail_with(messages::TEAM_TRANSFERS))
}

async fn team_last_fixtures(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<u32>,
) -> Result<Json<Value>, RouteError> {
    api::fetch_team_last_fixtures(&state.client, &state.config, team_id)
        .await
        .map(Json)
        .map_err(fail_with(messages::TEAM_LAST_FIXTURES))
}

async fn match_details(
    State(state): State<Arc<AppState>>,
    Path(fixture_id): Path<u32>,
) -> Result<Json<AggregatedMatch>, RouteError> {
    api::fetch_match_details(&state.client, &state.config, fixture_id)
        .await
        .map(Json)
        .map_err(fail_with(messages::MATCH_DETAILS))
}

async fn player_details(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<u32>,
    Query(q): Query<SeasonQuery>,
) -> Result<Json<Value>, RouteError> {
    api::fetch_player_details(&state.client, &state.config, player_id, q.season)
        .await
        .map(Json)
        .map_err(fail_with(messages::PLAYER_DETAILS))
}

async fn player_transfers(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<u32>,
) -> Result<Json<Vec<Value>>, RouteError> {
    api::fetch_player_transfers(&state.client, &state.config, player_id)
        .await
        .map(Json)
        .map_err(fail_with(messages::PLAYER_TRANSFERS))
}

async fn player_trophies(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<u32>,
) -> Result<Json<Value>, RouteError> {
    api::fetch_player_trophies(&state.client, &state.config, player_id)
        .await
        .map(Json)
        .map_err(fail_with(messages::PLAYER_TROPHIES))
}
