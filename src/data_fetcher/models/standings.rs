use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of the `/standings` response array.
/// Every level may be missing; see `extract_league_snapshot`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsEntry {
    #[serde(default)]
    pub league: Option<StandingsLeague>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsLeague {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub season: Option<i64>,
    /// Standings groups. Regular leagues have one group, cup group stages several.
    /// Kept untyped so a malformed group degrades instead of failing the parse.
    #[serde(default)]
    pub standings: Option<Value>,
}

/// Summary header of a league as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueInfo {
    pub name: Option<String>,
    pub country: Option<String>,
    pub logo: Option<String>,
    pub season: Option<i64>,
    pub id: Option<i64>,
}

/// Client-facing standings payload: the first standings group and the league header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeagueSnapshot {
    pub standings: Vec<Value>,
    #[serde(rename = "leagueInfo")]
    pub league_info: Option<LeagueInfo>,
}
