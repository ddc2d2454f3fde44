use super::Config;
use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Both upstream base URLs must be non-empty and start with http:// or https://
/// - Port cannot be zero
/// - If a log file path is provided, it cannot be empty
///
/// API keys are not checked here. An empty key is a runtime concern that
/// the upstream reports on every request.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_base_url("Sports API base URL", &config.sports_api_base_url)?;
    validate_base_url("News API base URL", &config.news_api_base_url)?;

    if config.port == 0 {
        return Err(AppError::config_error("Port cannot be zero"));
    }

    if let Some(log_path) = &config.log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

fn validate_base_url(name: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must start with http:// or https://"
        )));
    }

    Ok(())
}
