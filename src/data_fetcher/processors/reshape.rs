//! Extraction functions, one per upstream shape.
//!
//! Upstream payloads are parsed into the partial types in `models` and
//! every missing level is resolved here, once, into an empty value.

use serde_json::{Map, Value};

use crate::constants::news::LEAGUE_NAMES;
use crate::data_fetcher::models::{
    AggregatedMatch, LeagueInfo, LeagueSnapshot, PlayerTransfersEntry, SquadEntry,
    StandingsEntry,
};

/// Builds the standings payload from `response[0].league`.
///
/// Returns `{ standings: [], leagueInfo: null }` when the response is empty
/// or its first element has no league. A league whose standings or first
/// group is missing or not a list keeps its header and gets an empty table.
pub fn extract_league_snapshot(entries: Vec<StandingsEntry>) -> LeagueSnapshot {
    let Some(league) = entries.into_iter().next().and_then(|entry| entry.league) else {
        return LeagueSnapshot::default();
    };

    let standings = match league.standings {
        Some(Value::Array(groups)) => match groups.into_iter().next() {
            Some(Value::Array(rows)) => rows,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    LeagueSnapshot {
        standings,
        league_info: Some(LeagueInfo {
            name: league.name,
            country: league.country,
            logo: league.logo,
            season: league.season,
            id: league.id,
        }),
    }
}

/// First element of a response array, or `{}` when there is none.
pub fn first_or_empty_object(values: Vec<Value>) -> Value {
    values
        .into_iter()
        .next()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// `response[0].players`, or `[]` when absent.
pub fn first_squad_players(entries: Vec<SquadEntry>) -> Vec<Value> {
    entries
        .into_iter()
        .next()
        .and_then(|entry| entry.players)
        .unwrap_or_default()
}

/// `response[0].transfers`, or `[]` when absent.
pub fn first_player_transfers(entries: Vec<PlayerTransfersEntry>) -> Vec<Value> {
    entries
        .into_iter()
        .next()
        .and_then(|entry| entry.transfers)
        .unwrap_or_default()
}

/// Merges the four fixture queries by position.
pub fn assemble_match_details(
    fixture: Vec<Value>,
    statistics: Vec<Value>,
    lineups: Vec<Value>,
    events: Vec<Value>,
) -> AggregatedMatch {
    AggregatedMatch {
        fixture: fixture.into_iter().next(),
        statistics,
        lineups,
        events,
    }
}

/// News search name for a league id, if the league is one of the known six.
///
/// The id must be written exactly as the league's decimal id, so `"039"` or
/// `" 39"` are not known leagues.
pub fn league_news_name(league_id: &str) -> Option<&'static str> {
    LEAGUE_NAMES
        .iter()
        .find(|(known, _)| known.to_string() == league_id)
        .map(|(_, name)| *name)
}
