use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the relay.
///
/// Built once at process start and shared with every request handler.
/// Nothing reads the environment after [`Config::load`] returns.
#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    /// API-Football key sent in the `x-apisports-key` header.
    #[serde(default)]
    pub sports_api_key: String,
    /// NewsAPI key sent as a bearer token.
    #[serde(default)]
    pub news_api_key: String,
    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the sports-data provider. Should include the scheme.
    #[serde(default = "default_sports_api_base_url")]
    pub sports_api_base_url: String,
    /// Base URL of the news provider. Should include the scheme.
    #[serde(default = "default_news_api_base_url")]
    pub news_api_base_url: String,
    /// Season used when a request does not name one.
    #[serde(default = "default_season")]
    pub default_season: i32,
    /// Upstream request timeout in seconds. The HTTP client default (none) applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_port() -> u16 {
    constants::DEFAULT_PORT
}

fn default_sports_api_base_url() -> String {
    constants::DEFAULT_SPORTS_API_BASE_URL.to_string()
}

fn default_news_api_base_url() -> String {
    constants::DEFAULT_NEWS_API_BASE_URL.to_string()
}

fn default_season() -> i32 {
    constants::DEFAULT_SEASON
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sports_api_key: String::new(),
            news_api_key: String::new(),
            port: default_port(),
            sports_api_base_url: default_sports_api_base_url(),
            news_api_base_url: default_news_api_base_url(),
            default_season: default_season(),
            http_timeout_seconds: None,
            log_file_path: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("sports_api_key", &mask_secret(&self.sports_api_key))
            .field("news_api_key", &mask_secret(&self.news_api_key))
            .field("port", &self.port)
            .field("sports_api_base_url", &self.sports_api_base_url)
            .field("news_api_base_url", &self.news_api_base_url)
            .field("default_season", &self.default_season)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

/// Hides all but the last four characters of a secret.
fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let visible: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{visible}")
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl Config {
    /// Loads configuration from a TOML file and the process environment.
    ///
    /// The file is read from `path` when given, otherwise from the
    /// platform config location if a file exists there. Environment
    /// variables override file values, then the result is validated.
    ///
    /// # Environment Variables
    /// - `API_FOOTBALL_KEY` - API-Football key
    /// - `NEWS_API_KEY` - NewsAPI key
    /// - `PORT` - Listening port (default: 4000)
    /// - `FOOTBALL_RELAY_SPORTS_API_URL` - Override sports API base URL
    /// - `FOOTBALL_RELAY_NEWS_API_URL` - Override news API base URL
    /// - `FOOTBALL_RELAY_HTTP_TIMEOUT` - Upstream timeout in seconds
    /// - `FOOTBALL_RELAY_LOG_FILE` - Override log file path
    /// - `FOOTBALL_RELAY_DEFAULT_SEASON` - Season used when requests give none
    ///
    /// Ignored environment values are logged right away. Callers that set up
    /// logging afterwards should use [`Config::load_with_warnings`].
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - The file is unreadable or the result is invalid
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        let (config, warnings) = Self::load_with_warnings(path).await?;
        for warning in &warnings {
            warn!("{warning}");
        }
        Ok(config)
    }

    /// Same as [`Config::load`], but hands back the ignored environment
    /// values instead of logging them.
    pub async fn load_with_warnings(path: Option<&str>) -> Result<(Self, Vec<String>), AppError> {
        let config_path = path.map(str::to_string).unwrap_or_else(get_config_path);

        let mut config = if Path::new(&config_path).exists() {
            info!("Loading configuration from {config_path}");
            Self::load_from_path(&config_path).await?
        } else if path.is_some() {
            return Err(AppError::config_error(format!(
                "Config file '{config_path}' does not exist"
            )));
        } else {
            Config::default()
        };

        let warnings = config.apply_env_overrides();
        config.validate()?;

        Ok((config, warnings))
    }

    /// Loads configuration from a TOML file without applying the environment.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Overrides fields from environment variables that are set and non-empty.
    /// Unparseable numeric values are ignored; one message per ignored value
    /// is returned.
    pub fn apply_env_overrides(&mut self) -> Vec<String> {
        let mut ignored = Vec::new();

        if let Some(key) = env_value(env_vars::SPORTS_API_KEY) {
            self.sports_api_key = key;
        }

        if let Some(key) = env_value(env_vars::NEWS_API_KEY) {
            self.news_api_key = key;
        }

        if let Some(port) = env_value(env_vars::PORT) {
            match port.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => ignored.push(format!("Ignoring invalid {}: {port}", env_vars::PORT)),
            }
        }

        if let Some(url) = env_value(env_vars::SPORTS_API_URL) {
            self.sports_api_base_url = url;
        }

        if let Some(url) = env_value(env_vars::NEWS_API_URL) {
            self.news_api_base_url = url;
        }

        if let Some(timeout) = env_value(env_vars::HTTP_TIMEOUT) {
            match timeout.parse::<u64>() {
                Ok(timeout) => self.http_timeout_seconds = Some(timeout),
                Err(_) => {
                    ignored.push(format!("Ignoring invalid {}: {timeout}", env_vars::HTTP_TIMEOUT))
                }
            }
        }

        if let Some(log_file_path) = env_value(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(season) = env_value(env_vars::DEFAULT_SEASON) {
            match season.parse::<i32>() {
                Ok(season) => self.default_season = season,
                Err(_) => ignored.push(format!(
                    "Ignoring invalid {}: {season}",
                    env_vars::DEFAULT_SEASON
                )),
            }
        }

        ignored
    }

    /// Logs a warning for every provider key that is not configured.
    /// Missing keys are not a startup error, the provider rejects the calls.
    pub fn warn_missing_keys(&self) {
        if self.sports_api_key.is_empty() {
            warn!(
                "{} is not set, sports API requests will be rejected upstream",
                env_vars::SPORTS_API_KEY
            );
        }
        if self.news_api_key.is_empty() {
            warn!(
                "{} is not set, news API requests will be rejected upstream",
                env_vars::NEWS_API_KEY
            );
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Base URL of the sports provider without a trailing slash.
    pub fn sports_base(&self) -> &str {
        self.sports_api_base_url.trim_end_matches('/')
    }

    /// Base URL of the news provider without a trailing slash.
    pub fn news_base(&self) -> &str {
        self.news_api_base_url.trim_end_matches('/')
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration on stdout with keys masked.
    pub fn display(&self) {
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{}", get_config_path());
        println!("────────────────────────────────────");
        println!("Sports API:");
        println!("{}", self.sports_api_base_url);
        println!("key {}", mask_secret(&self.sports_api_key));
        println!("────────────────────────────────────");
        println!("News API:");
        println!("{}", self.news_api_base_url);
        println!("key {}", mask_secret(&self.news_api_key));
        println!("────────────────────────────────────");
        println!("Port: {}", self.port);
        println!("Default Season: {}", self.default_season);
        match self.http_timeout_seconds {
            Some(seconds) => println!("HTTP Timeout: {seconds} seconds"),
            None => println!("HTTP Timeout: client default"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    const ALL_ENV_VARS: [&str; 8] = [
        env_vars::SPORTS_API_KEY,
        env_vars::NEWS_API_KEY,
        env_vars::PORT,
        env_vars::SPORTS_API_URL,
        env_vars::NEWS_API_URL,
        env_vars::HTTP_TIMEOUT,
        env_vars::LOG_FILE,
        env_vars::DEFAULT_SEASON,
    ];

    fn clear_env() {
        for name in ALL_ENV_VARS {
            // SAFETY: tests touching the environment are serialized
            unsafe { std::env::remove_var(name) };
        }
    }

    fn set_env(name: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(name, value) };
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 4000);
        assert_eq!(config.default_season, 2023);
        assert_eq!(
            config.sports_api_base_url,
            "https://v3.football.api-sports.io"
        );
        assert_eq!(config.news_api_base_url, "https://newsapi.org/v2");
        assert!(config.http_timeout_seconds.is_none());
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_load_from_path() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
sports_api_key = "abc123"
news_api_key = "news456"
port = 8080
default_season = 2024
http_timeout_seconds = 15
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.sports_api_key, "abc123");
        assert_eq!(config.news_api_key, "news456");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_season, 2024);
        assert_eq!(config.http_timeout_seconds, Some(15));
        // Unset fields fall back to defaults
        assert_eq!(config.news_api_base_url, "https://newsapi.org/v2");
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "port = \"unclosed")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_load_missing_explicit_path_fails() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let result = Config::load(Some(&missing.to_string_lossy())).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_file_values() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "sports_api_key = \"from-file\"\nport = 5000\n")
            .await
            .unwrap();

        set_env(env_vars::SPORTS_API_KEY, "from-env");
        set_env(env_vars::PORT, "6000");
        set_env(env_vars::DEFAULT_SEASON, "2025");

        let config = Config::load(Some(&config_path.to_string_lossy()))
            .await
            .unwrap();
        clear_env();

        assert_eq!(config.sports_api_key, "from-env");
        assert_eq!(config.port, 6000);
        assert_eq!(config.default_season, 2025);
    }

    #[test]
    #[serial]
    fn test_invalid_numeric_env_values_are_ignored() {
        clear_env();
        set_env(env_vars::PORT, "not-a-port");
        set_env(env_vars::HTTP_TIMEOUT, "soon");

        let mut config = Config::default();
        let ignored = config.apply_env_overrides();
        clear_env();

        assert_eq!(config.port, 4000);
        assert_eq!(config.http_timeout_seconds, None);
        assert_eq!(
            ignored,
            vec![
                "Ignoring invalid PORT: not-a-port".to_string(),
                "Ignoring invalid FOOTBALL_RELAY_HTTP_TIMEOUT: soon".to_string(),
            ]
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_load_hands_back_ignored_env_values() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "default_season = 2022\n")
            .await
            .unwrap();

        set_env(env_vars::DEFAULT_SEASON, "next");

        let (config, warnings) = Config::load_with_warnings(Some(&config_path.to_string_lossy()))
            .await
            .unwrap();
        clear_env();

        assert_eq!(config.default_season, 2022);
        assert_eq!(
            warnings,
            vec!["Ignoring invalid FOOTBALL_RELAY_DEFAULT_SEASON: next".to_string()]
        );
    }

    #[test]
    #[serial]
    fn test_blank_env_values_are_ignored() {
        clear_env();
        set_env(env_vars::NEWS_API_KEY, "   ");

        let mut config = Config {
            news_api_key: "kept".to_string(),
            ..Config::default()
        };
        config.apply_env_overrides();
        clear_env();

        assert_eq!(config.news_api_key, "kept");
    }

    #[test]
    fn test_base_urls_drop_trailing_slash() {
        let config = Config {
            sports_api_base_url: "http://localhost:9000/".to_string(),
            news_api_base_url: "http://localhost:9001/v2/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.sports_base(), "http://localhost:9000");
        assert_eq!(config.news_base(), "http://localhost:9001/v2");
    }

    #[test]
    fn test_debug_masks_keys() {
        let config = Config {
            sports_api_key: "supersecretkey1234".to_string(),
            ..Config::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("supersecretkey1234"));
        assert!(debug.contains("****1234"));
        assert!(debug.contains("(not set)"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config {
            sports_api_key: "k".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };

        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("log_file_path = \"/custom/log/path\""));
        assert!(!toml_string.contains("http_timeout_seconds"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized.sports_api_key, "k");
        assert_eq!(deserialized.port, config.port);
        assert_eq!(deserialized.log_file_path, config.log_file_path);
    }

    #[test]
    fn test_get_paths() {
        assert!(Config::get_config_path().contains("football_relay"));
        assert!(Config::get_config_path().ends_with("config.toml"));
        assert!(Config::get_log_dir_path().ends_with("logs"));
    }
}
