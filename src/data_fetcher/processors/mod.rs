pub mod grouping;
pub mod reshape;

pub use grouping::{LeagueGroup, group_fixtures_by_league};
pub use reshape::{
    assemble_match_details, extract_league_snapshot, first_or_empty_object,
    first_player_transfers, first_squad_players, league_news_name,
};
