//! URL building utilities for upstream endpoints
//!
//! Every builder takes the provider base URL without a trailing slash.
//! Free-text values are percent-encoded, numeric ids are written as-is.

use crate::constants::{TEAM_LAST_FIXTURES_COUNT, news};
use urlencoding::encode;

/// Builds the fixtures-by-date URL.
///
/// # Example
/// ```
/// use football_relay::data_fetcher::api::build_fixtures_by_date_url;
///
/// let url = build_fixtures_by_date_url("https://api.example.com", "2024-01-15");
/// assert_eq!(url, "https://api.example.com/fixtures?date=2024-01-15");
/// ```
pub fn build_fixtures_by_date_url(base: &str, date: &str) -> String {
    format!("{base}/fixtures?date={}", encode(date))
}

/// Builds the league standings URL.
///
/// # Example
/// ```
/// use football_relay::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", 39, 2023);
/// assert_eq!(url, "https://api.example.com/standings?league=39&season=2023");
/// ```
pub fn build_standings_url(base: &str, league_id: u32, season: i32) -> String {
    format!("{base}/standings?league={league_id}&season={season}")
}

pub fn build_top_scorers_url(base: &str, league_id: u32, season: i32) -> String {
    format!("{base}/players/topscorers?league={league_id}&season={season}")
}

pub fn build_top_assists_url(base: &str, league_id: u32, season: i32) -> String {
    format!("{base}/players/topassists?league={league_id}&season={season}")
}

pub fn build_team_url(base: &str, team_id: u32) -> String {
    format!("{base}/teams?id={team_id}")
}

pub fn build_team_squad_url(base: &str, team_id: u32) -> String {
    format!("{base}/players/squads?team={team_id}")
}

/// Builds the team statistics URL for one league and season.
///
/// # Example
/// ```
/// use football_relay::data_fetcher::api::build_team_statistics_url;
///
/// let url = build_team_statistics_url("https://api.example.com", 33, 39, 2023);
/// assert_eq!(
///     url,
///     "https://api.example.com/teams/statistics?league=39&team=33&season=2023"
/// );
/// ```
pub fn build_team_statistics_url(base: &str, team_id: u32, league_id: u32, season: i32) -> String {
    format!("{base}/teams/statistics?league={league_id}&team={team_id}&season={season}")
}

pub fn build_team_coach_url(base: &str, team_id: u32) -> String {
    format!("{base}/coachs?team={team_id}")
}

pub fn build_team_transfers_url(base: &str, team_id: u32) -> String {
    format!("{base}/transfers?team={team_id}")
}

pub fn build_team_last_fixtures_url(base: &str, team_id: u32) -> String {
    format!("{base}/fixtures?team={team_id}&last={TEAM_LAST_FIXTURES_COUNT}")
}

/// Builds the player URL. The season segment is left out entirely when no
/// season is given, which makes the provider return profile data only.
///
/// # Example
/// ```
/// use football_relay::data_fetcher::api::build_player_url;
///
/// assert_eq!(
///     build_player_url("https://api.example.com", 276, None),
///     "https://api.example.com/players?id=276"
/// );
/// assert_eq!(
///     build_player_url("https://api.example.com", 276, Some(2023)),
///     "https://api.example.com/players?id=276&season=2023"
/// );
/// ```
pub fn build_player_url(base: &str, player_id: u32, season: Option<i32>) -> String {
    match season {
        Some(season) => format!("{base}/players?id={player_id}&season={season}"),
        None => format!("{base}/players?id={player_id}"),
    }
}

pub fn build_player_transfers_url(base: &str, player_id: u32) -> String {
    format!("{base}/transfers?player={player_id}")
}

pub fn build_player_trophies_url(base: &str, player_id: u32) -> String {
    format!("{base}/trophies?player={player_id}")
}

pub fn build_fixture_url(base: &str, fixture_id: u32) -> String {
    format!("{base}/fixtures?id={fixture_id}")
}

pub fn build_fixture_statistics_url(base: &str, fixture_id: u32) -> String {
    format!("{base}/fixtures/statistics?fixture={fixture_id}")
}

pub fn build_fixture_lineups_url(base: &str, fixture_id: u32) -> String {
    format!("{base}/fixtures/lineups?fixture={fixture_id}")
}

pub fn build_fixture_events_url(base: &str, fixture_id: u32) -> String {
    format!("{base}/fixtures/events?fixture={fixture_id}")
}

/// Builds a news search URL, newest articles first.
///
/// # Example
/// ```
/// use football_relay::data_fetcher::api::build_news_search_url;
///
/// let url = build_news_search_url("https://news.example.com/v2", "Arsenal football", 6);
/// assert_eq!(
///     url,
///     "https://news.example.com/v2/everything?q=Arsenal%20football&sortBy=publishedAt&pageSize=6&language=en"
/// );
/// ```
pub fn build_news_search_url(base: &str, query: &str, page_size: u32) -> String {
    format!(
        "{base}/everything?q={}&sortBy={}&pageSize={page_size}&language={}",
        encode(query),
        news::SORT_BY,
        news::LANGUAGE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com";

    #[test]
    fn test_fixtures_by_date_encodes_value() {
        assert_eq!(
            build_fixtures_by_date_url(BASE, "2024-01-15&league=39"),
            "https://api.example.com/fixtures?date=2024-01-15%26league%3D39"
        );
    }

    #[test]
    fn test_league_endpoints() {
        assert_eq!(
            build_top_scorers_url(BASE, 140, 2022),
            "https://api.example.com/players/topscorers?league=140&season=2022"
        );
        assert_eq!(
            build_top_assists_url(BASE, 140, 2022),
            "https://api.example.com/players/topassists?league=140&season=2022"
        );
    }

    #[test]
    fn test_team_endpoints() {
        assert_eq!(build_team_url(BASE, 33), "https://api.example.com/teams?id=33");
        assert_eq!(
            build_team_squad_url(BASE, 33),
            "https://api.example.com/players/squads?team=33"
        );
        assert_eq!(
            build_team_coach_url(BASE, 33),
            "https://api.example.com/coachs?team=33"
        );
        assert_eq!(
            build_team_transfers_url(BASE, 33),
            "https://api.example.com/transfers?team=33"
        );
        assert_eq!(
            build_team_last_fixtures_url(BASE, 33),
            "https://api.example.com/fixtures?team=33&last=10"
        );
    }

    #[test]
    fn test_player_endpoints() {
        assert_eq!(
            build_player_transfers_url(BASE, 276),
            "https://api.example.com/transfers?player=276"
        );
        assert_eq!(
            build_player_trophies_url(BASE, 276),
            "https://api.example.com/trophies?player=276"
        );
    }

    #[test]
    fn test_fixture_endpoints() {
        assert_eq!(
            build_fixture_url(BASE, 1035037),
            "https://api.example.com/fixtures?id=1035037"
        );
        assert_eq!(
            build_fixture_statistics_url(BASE, 1035037),
            "https://api.example.com/fixtures/statistics?fixture=1035037"
        );
        assert_eq!(
            build_fixture_lineups_url(BASE, 1035037),
            "https://api.example.com/fixtures/lineups?fixture=1035037"
        );
        assert_eq!(
            build_fixture_events_url(BASE, 1035037),
            "https://api.example.com/fixtures/events?fixture=1035037"
        );
    }

    #[test]
    fn test_news_query_encodes_non_ascii() {
        let url = build_news_search_url(BASE, "Kylian Mbappé soccer player", 6);
        assert!(url.contains("q=Kylian%20Mbapp%C3%A9%20soccer%20player"));
        assert!(url.ends_with("&pageSize=6&language=en"));
    }
}
