use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::fetch_utils::{Credentials, fetch};
use super::urls::build_news_search_url;
use crate::config::Config;
use crate::constants::news;
use crate::data_fetcher::models::NewsEnvelope;
use crate::data_fetcher::processors::league_news_name;
use crate::error::AppError;

/// Runs one NewsAPI search and returns its articles.
async fn search_news(
    client: &Client,
    config: &Config,
    query: &str,
    page_size: u32,
) -> Result<Vec<Value>, AppError> {
    let url = build_news_search_url(config.news_base(), query, page_size);
    let envelope: NewsEnvelope =
        fetch(client, &url, Credentials::Bearer(&config.news_api_key)).await?;

    if envelope.status.as_deref() == Some("error") {
        warn!("News provider reported an error for query '{query}'");
    }

    Ok(envelope.into_articles())
}

/// Latest general football headlines.
#[instrument(skip(client, config))]
pub async fn fetch_football_news(
    client: &Client,
    config: &Config,
) -> Result<Vec<Value>, AppError> {
    search_news(client, config, news::GENERAL_QUERY, news::GENERAL_PAGE_SIZE).await
}

/// Headlines for one of the known leagues. Any other id yields no articles
/// and no upstream request.
#[instrument(skip(client, config))]
pub async fn fetch_league_news(
    client: &Client,
    config: &Config,
    league_id: &str,
) -> Result<Vec<Value>, AppError> {
    let Some(league_name) = league_news_name(league_id) else {
        debug!("No news search name for league '{league_id}'");
        return Ok(Vec::new());
    };

    search_news(client, config, league_name, news::LEAGUE_PAGE_SIZE).await
}

#[instrument(skip(client, config))]
pub async fn fetch_team_news(
    client: &Client,
    config: &Config,
    team_name: &str,
) -> Result<Vec<Value>, AppError> {
    let team_name = team_name.trim();
    if team_name.is_empty() {
        return Ok(Vec::new());
    }

    let query = format!("{team_name} {}", news::TEAM_QUERY_SUFFIX);
    search_news(client, config, &query, news::TEAM_PAGE_SIZE).await
}

#[instrument(skip(client, config))]
pub async fn fetch_player_news(
    client: &Client,
    config: &Config,
    player_name: &str,
) -> Result<Vec<Value>, AppError> {
    let player_name = player_name.trim();
    if player_name.is_empty() {
        return Ok(Vec::new());
    }

    let query = format!("{player_name} {}", news::PLAYER_QUERY_SUFFIX);
    search_news(client, config, &query, news::PLAYER_PAGE_SIZE).await
}
