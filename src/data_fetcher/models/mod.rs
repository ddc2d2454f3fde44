pub mod details;
pub mod envelope;
pub mod fixtures;
pub mod standings;

pub use details::{AggregatedMatch, PlayerTransfersEntry, SquadEntry};
pub use envelope::{NewsEnvelope, SportsEnvelope};
pub use fixtures::{FixtureGoals, FixtureInfo, FixtureLeague, FixtureStatus, FixtureSummary, FixtureTeam, FixtureTeams};
pub use standings::{LeagueInfo, LeagueSnapshot, StandingsEntry, StandingsLeague};
