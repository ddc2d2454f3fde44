pub mod api;
pub mod models;
pub mod processors;

pub use api::create_http_client;
pub use models::{AggregatedMatch, FixtureSummary, LeagueInfo, LeagueSnapshot};
pub use processors::{LeagueGroup, group_fixtures_by_league};
