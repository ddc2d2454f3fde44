use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything known about one fixture, merged from four upstream queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregatedMatch {
    /// First element of the fixture query, null when the id matched nothing
    pub fixture: Option<Value>,
    pub statistics: Vec<Value>,
    pub lineups: Vec<Value>,
    pub events: Vec<Value>,
}

/// One element of the `/players/squads` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SquadEntry {
    #[serde(default)]
    pub players: Option<Vec<Value>>,
}

/// One element of the `/transfers?player=` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerTransfersEntry {
    #[serde(default)]
    pub transfers: Option<Vec<Value>>,
}
