use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use super::fetch_utils::{Credentials, fetch};
use super::urls::{
    build_fixture_events_url, build_fixture_lineups_url, build_fixture_statistics_url,
    build_fixture_url, build_fixtures_by_date_url, build_player_transfers_url,
    build_player_trophies_url, build_player_url, build_standings_url, build_team_coach_url,
    build_team_last_fixtures_url, build_team_squad_url, build_team_statistics_url,
    build_team_transfers_url, build_team_url, build_top_assists_url, build_top_scorers_url,
};
use crate::config::Config;
use crate::data_fetcher::models::{
    AggregatedMatch, LeagueSnapshot, PlayerTransfersEntry, SportsEnvelope, SquadEntry,
    StandingsEntry,
};
use crate::data_fetcher::processors::{
    assemble_match_details, extract_league_snapshot, first_or_empty_object,
    first_player_transfers, first_squad_players,
};
use crate::error::AppError;

/// Fetches one API-Football endpoint and returns its envelope.
async fn fetch_sports<T: DeserializeOwned>(
    client: &Client,
    config: &Config,
    url: &str,
) -> Result<SportsEnvelope<T>, AppError> {
    let envelope: SportsEnvelope<T> = fetch(
        client,
        url,
        Credentials::SportsApiKey(&config.sports_api_key),
    )
    .await?;

    if envelope.has_errors() {
        warn!("Provider reported errors for {}: {}", url, envelope.errors);
    }

    Ok(envelope)
}

/// Fetches a list endpoint and returns its `response` untouched.
async fn relay_list(client: &Client, config: &Config, url: &str) -> Result<Value, AppError> {
    Ok(fetch_sports::<Value>(client, config, url)
        .await?
        .into_value_or(Value::Array(Vec::new())))
}

/// All fixtures scheduled on a date (`YYYY-MM-DD`).
#[instrument(skip(client, config))]
pub async fn fetch_matches_by_date(
    client: &Client,
    config: &Config,
    date: &str,
) -> Result<Value, AppError> {
    let url = build_fixtures_by_date_url(config.sports_base(), date);
    relay_list(client, config, &url).await
}

/// Standings table and league header for a league and season.
#[instrument(skip(client, config))]
pub async fn fetch_league_standings(
    client: &Client,
    config: &Config,
    league_id: u32,
    season: Option<i32>,
) -> Result<LeagueSnapshot, AppError> {
    let season = season.unwrap_or(config.default_season);
    let url = build_standings_url(config.sports_base(), league_id, season);

    let entries = fetch_sports::<Vec<StandingsEntry>>(client, config, &url)
        .await?
        .into_response();
    let snapshot = extract_league_snapshot(entries);

    if snapshot.league_info.is_none() {
        info!("No standings for league {league_id} season {season}");
    }

    Ok(snapshot)
}

#[instrument(skip(client, config))]
pub async fn fetch_top_scorers(
    client: &Client,
    config: &Config,
    league_id: u32,
    season: Option<i32>,
) -> Result<Value, AppError> {
    let season = season.unwrap_or(config.default_season);
    let url = build_top_scorers_url(config.sports_base(), league_id, season);
    relay_list(client, config, &url).await
}

#[instrument(skip(client, config))]
pub async fn fetch_top_assisters(
    client: &Client,
    config: &Config,
    league_id: u32,
    season: Option<i32>,
) -> Result<Value, AppError> {
    let season = season.unwrap_or(config.default_season);
    let url = build_top_assists_url(config.sports_base(), league_id, season);
    relay_list(client, config, &url).await
}

/// Team profile and venue, `{}` for an unknown team.
#[instrument(skip(client, config))]
pub async fn fetch_team_info(
    client: &Client,
    config: &Config,
    team_id: u32,
) -> Result<Value, AppError> {
    let url = build_team_url(config.sports_base(), team_id);
    let teams = fetch_sports::<Vec<Value>>(client, config, &url)
        .await?
        .into_response();
    Ok(first_or_empty_object(teams))
}

/// Current squad player list, `[]` for an unknown team.
#[instrument(skip(client, config))]
pub async fn fetch_team_squad(
    client: &Client,
    config: &Config,
    team_id: u32,
) -> Result<Vec<Value>, AppError> {
    let url = build_team_squad_url(config.sports_base(), team_id);
    let squads = fetch_sports::<Vec<SquadEntry>>(client, config, &url)
        .await?
        .into_response();
    Ok(first_squad_players(squads))
}

/// Season statistics of a team within one league. The provider answers
/// with a single object here, not a list.
#[instrument(skip(client, config))]
pub async fn fetch_team_statistics(
    client: &Client,
    config: &Config,
    team_id: u32,
    league_id: u32,
    season: Option<i32>,
) -> Result<Value, AppError> {
    let season = season.unwrap_or(config.default_season);
    let url = build_team_statistics_url(config.sports_base(), team_id, league_id, season);
    Ok(fetch_sports::<Value>(client, config, &url)
        .await?
        .into_value_or(Value::Object(Map::new())))
}

#[instrument(skip(client, config))]
pub async fn fetch_team_coach(
    client: &Client,
    config: &Config,
    team_id: u32,
) -> Result<Value, AppError> {
    let url = build_team_coach_url(config.sports_base(), team_id);
    let coaches = fetch_sports::<Vec<Value>>(client, config, &url)
        .await?
        .into_response();
    Ok(first_or_empty_object(coaches))
}

#[instrument(skip(client, config))]
pub async fn fetch_team_transfers(
    client: &Client,
    config: &Config,
    team_id: u32,
) -> Result<Value, AppError> {
    let url = build_team_transfers_url(config.sports_base(), team_id);
    let transfers = fetch_sports::<Vec<Value>>(client, config, &url)
        .await?
        .into_response();
    Ok(first_or_empty_object(transfers))
}

#[instrument(skip(client, config))]
pub async fn fetch_team_last_fixtures(
    client: &Client,
    config: &Config,
    team_id: u32,
) -> Result<Value, AppError> {
    let url = build_team_last_fixtures_url(config.sports_base(), team_id);
    relay_list(client, config, &url).await
}

/// Player profile, with that season's statistics when a season is given.
#[instrument(skip(client, config))]
pub async fn fetch_player_details(
    client: &Client,
    config: &Config,
    player_id: u32,
    season: Option<i32>,
) -> Result<Value, AppError> {
    let url = build_player_url(config.sports_base(), player_id, season);
    let players = fetch_sports::<Vec<Value>>(client, config, &url)
        .await?
        .into_response();
    Ok(first_or_empty_object(players))
}

#[instrument(skip(client, config))]
pub async fn fetch_player_transfers(
    client: &Client,
    config: &Config,
    player_id: u32,
) -> Result<Vec<Value>, AppError> {
    let url = build_player_transfers_url(config.sports_base(), player_id);
    let entries = fetch_sports::<Vec<PlayerTransfersEntry>>(client, config, &url)
        .await?
        .into_response();
    Ok(first_player_transfers(entries))
}

#[instrument(skip(client, config))]
pub async fn fetch_player_trophies(
    client: &Client,
    config: &Config,
    player_id: u32,
) -> Result<Value, AppError> {
    let url = build_player_trophies_url(config.sports_base(), player_id);
    relay_list(client, config, &url).await
}

/// Fixture record, statistics, lineups and events of one match.
///
/// The four requests are in flight together. All of them are awaited, and
/// if any one fails the whole aggregation fails with that error.
#[instrument(skip(client, config))]
pub async fn fetch_match_details(
    client: &Client,
    config: &Config,
    fixture_id: u32,
) -> Result<AggregatedMatch, AppError> {
    let base = config.sports_base();
    let fixture_url = build_fixture_url(base, fixture_id);
    let statistics_url = build_fixture_statistics_url(base, fixture_id);
    let lineups_url = build_fixture_lineups_url(base, fixture_id);
    let events_url = build_fixture_events_url(base, fixture_id);

    let (fixture, statistics, lineups, events) = tokio::join!(
        fetch_sports::<Vec<Value>>(client, config, &fixture_url),
        fetch_sports::<Vec<Value>>(client, config, &statistics_url),
        fetch_sports::<Vec<Value>>(client, config, &lineups_url),
        fetch_sports::<Vec<Value>>(client, config, &events_url),
    );

    Ok(assemble_match_details(
        fixture?.into_response(),
        statistics?.into_response(),
        lineups?.into_response(),
        events?.into_response(),
    ))
}
