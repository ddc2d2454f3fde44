//! Application-wide constants and configuration values
//!
//! Upstream endpoints, default settings and the fixed strings that the
//! relay hands back to clients live here so the route and fetch code only
//! refers to names.

/// Base URL of the API-Football (api-sports.io) v3 service
pub const DEFAULT_SPORTS_API_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Base URL of the NewsAPI v2 service
pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";

/// Port the relay listens on when neither config nor environment set one
pub const DEFAULT_PORT: u16 = 4000;

/// Season used by league and team endpoints when the caller gives none
pub const DEFAULT_SEASON: i32 = 2023;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Header carrying the API-Football key
pub const SPORTS_API_KEY_HEADER: &str = "x-apisports-key";

/// Number of fixtures returned by the team "last fixtures" relay
pub const TEAM_LAST_FIXTURES_COUNT: u32 = 10;

/// Route prefixes of the inbound HTTP surface
pub mod routes {
    pub const FOOTBALL_PREFIX: &str = "/api/football";
    pub const NEWS_PREFIX: &str = "/api/news";
}

/// News search parameters
pub mod news {
    /// Query used for the general football feed
    pub const GENERAL_QUERY: &str = "soccer";
    pub const GENERAL_PAGE_SIZE: u32 = 10;
    pub const LEAGUE_PAGE_SIZE: u32 = 9;
    pub const TEAM_PAGE_SIZE: u32 = 6;
    pub const PLAYER_PAGE_SIZE: u32 = 6;
    /// Appended to a team name to form the search query
    pub const TEAM_QUERY_SUFFIX: &str = "football";
    /// Appended to a player name to form the search query
    pub const PLAYER_QUERY_SUFFIX: &str = "soccer player";
    pub const SORT_BY: &str = "publishedAt";
    pub const LANGUAGE: &str = "en";

    /// League ids with a known news search name
    pub const LEAGUE_NAMES: [(u32, &str); 6] = [
        (39, "Premier League"),
        (140, "La Liga"),
        (78, "Bundesliga"),
        (61, "Ligue 1"),
        (135, "Serie A"),
        (2, "Champions League"),
    ];
}

/// Fixed error bodies returned by each route on upstream failure
pub mod messages {
    pub const MATCHES: &str = "Failed to fetch matches";
    pub const STANDINGS: &str = "Failed to fetch standings";
    pub const TOP_SCORERS: &str = "Failed to fetch top scorers";
    pub const TOP_ASSISTERS: &str = "Failed to fetch top assisters";
    pub const TEAM_INFO: &str = "Failed to fetch team info";
    pub const TEAM_SQUAD: &str = "Failed to fetch squad";
    pub const TEAM_STATISTICS: &str = "Failed to fetch team stats";
    pub const TEAM_COACH: &str = "Failed to fetch coach info";
    pub const TEAM_TRANSFERS: &str = "Failed to fetch transfers";
    pub const TEAM_LAST_FIXTURES: &str = "Failed to fetch last fixtures";
    pub const PLAYER_DETAILS: &str = "Failed to fetch player details";
    pub const PLAYER_TRANSFERS: &str = "Failed to fetch player transfers";
    pub const PLAYER_TROPHIES: &str = "Failed to fetch player trophies";
    pub const MATCH_DETAILS: &str = "Failed to fetch match details";
    pub const FOOTBALL_NEWS: &str = "Failed to fetch football news";
    pub const LEAGUE_NEWS: &str = "Failed to fetch league news";
    pub const TEAM_NEWS: &str = "Failed to fetch team news";
    pub const PLAYER_NEWS: &str = "Failed to fetch player news";
}

/// Environment variable names
pub mod env_vars {
    /// API-Football key
    pub const SPORTS_API_KEY: &str = "API_FOOTBALL_KEY";

    /// NewsAPI key
    pub const NEWS_API_KEY: &str = "NEWS_API_KEY";

    /// Listening port
    pub const PORT: &str = "PORT";

    /// Override for the API-Football base URL
    pub const SPORTS_API_URL: &str = "FOOTBALL_RELAY_SPORTS_API_URL";

    /// Override for the NewsAPI base URL
    pub const NEWS_API_URL: &str = "FOOTBALL_RELAY_NEWS_API_URL";

    /// Upstream request timeout in seconds (no timeout when unset)
    pub const HTTP_TIMEOUT: &str = "FOOTBALL_RELAY_HTTP_TIMEOUT";

    /// Log file path override
    pub const LOG_FILE: &str = "FOOTBALL_RELAY_LOG_FILE";

    /// Season used when a request carries none
    pub const DEFAULT_SEASON: &str = "FOOTBALL_RELAY_DEFAULT_SEASON";
}

/// Name of the log file written in the log directory
pub const LOG_FILE_NAME: &str = "football_relay.log";
