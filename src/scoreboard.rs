//! Plain-text scoreboard for the `--once` mode.

use std::io::{self, Write};

use chrono::Local;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::data_fetcher::api::{create_http_client, fetch_matches_by_date};
use crate::data_fetcher::models::FixtureSummary;
use crate::data_fetcher::processors::{LeagueGroup, group_fixtures_by_league};
use crate::error::AppError;

const NO_MATCHES_MESSAGE: &str = "No matches found for this date.";

/// Parses the relayed fixtures list. Entries that are not objects are skipped.
pub fn parse_fixtures(fixtures: Value) -> Result<Vec<FixtureSummary>, AppError> {
    let Value::Array(items) = fixtures else {
        return Ok(Vec::new());
    };

    items
        .into_iter()
        .filter(Value::is_object)
        .map(|item| serde_json::from_value(item).map_err(AppError::from))
        .collect()
}

fn format_fixture_line(fixture: &FixtureSummary) -> String {
    let mut line = format!(
        "  {} {} {}",
        fixture.home_name(),
        fixture.score_display(),
        fixture.away_name()
    );

    let status = fixture.status_short();
    if !status.is_empty() {
        line.push_str(&format!("  [{status}]"));
    }
    if let Some(minute) = fixture.live_minute() {
        line.push_str(&format!(" {minute}'"));
    }

    line
}

/// Writes the scoreboard page for `date`.
pub fn render_scoreboard<W: Write>(
    out: &mut W,
    date: &str,
    groups: &[LeagueGroup],
) -> io::Result<()> {
    writeln!(out, "Matches for {date}")?;
    writeln!(out)?;

    if groups.is_empty() {
        writeln!(out, "{NO_MATCHES_MESSAGE}")?;
        return Ok(());
    }

    for group in groups {
        writeln!(out, "{}", group.league_name)?;
        for fixture in &group.fixtures {
            writeln!(out, "{}", format_fixture_line(fixture))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Fetches the fixtures of `date` (today when `None`) and prints the
/// scoreboard to stdout.
pub async fn run_once(config: &Config, date: Option<String>) -> Result<(), AppError> {
    let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    let client = create_http_client(config.http_timeout_seconds)?;

    let fixtures = parse_fixtures(fetch_matches_by_date(&client, config, &date).await?)?;
    info!("Fetched {} fixtures for {date}", fixtures.len());

    let groups = group_fixtures_by_league(fixtures);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_scoreboard(&mut out, &date, &groups)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(groups: &[LeagueGroup]) -> String {
        let mut buffer = Vec::new();
        render_scoreboard(&mut buffer, "2024-03-15", groups).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_empty_scoreboard() {
        let output = render(&[]);
        assert_eq!(output, "Matches for 2024-03-15\n\nNo matches found for this date.\n");
    }

    #[test]
    fn test_scoreboard_groups_and_lines() {
        let fixtures = parse_fixtures(json!([
            {
                "fixture": {"id": 1, "status": {"short": "2H", "elapsed": 67}},
                "league": {"name": "Premier League"},
                "teams": {"home": {"name": "Arsenal"}, "away": {"name": "Chelsea"}},
                "goals": {"home": 2, "away": 1}
            },
            {
                "fixture": {"id": 2, "status": {"short": "NS", "elapsed": null}},
                "league": {"name": "La Liga"},
                "teams": {"home": {"name": "Sevilla"}, "away": {"name": "Betis"}},
                "goals": {"home": null, "away": null}
            },
            {
                "fixture": {"id": 3, "status": {"short": "FT", "elapsed": 90}},
                "league": {"name": "Premier League"},
                "teams": {"home": {"name": "Everton"}, "away": {"name": "Fulham"}},
                "goals": {"home": 0, "away": 0}
            }
        ]))
        .unwrap();

        let output = render(&group_fixtures_by_league(fixtures));

        assert_eq!(
            output,
            "Matches for 2024-03-15\n\n\
             Premier League\n\
             \x20 Arsenal 2 - 1 Chelsea  [2H] 67'\n\
             \x20 Everton 0 - 0 Fulham  [FT]\n\n\
             La Liga\n\
             \x20 Sevilla vs Betis  [NS]\n\n"
        );
    }

    #[test]
    fn test_parse_fixtures_tolerates_odd_payloads() {
        assert!(parse_fixtures(json!({})).unwrap().is_empty());
        assert_eq!(parse_fixtures(json!([1, {"fixture": {"id": 4}}])).unwrap().len(), 1);
    }
}
