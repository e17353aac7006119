use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Upstream base URL is present and not a bare scheme
/// - Upstream timeout is non-zero
/// - Telegram bot token is present
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.upstream.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "upstream.base_url cannot be empty".to_string(),
        ));
    }
    if !config.upstream.base_url.starts_with("http://")
        && !config.upstream.base_url.starts_with("https://")
    {
        return Err(ConfigError::ValidationError(
            "upstream.base_url must start with http:// or https://".to_string(),
        ));
    }
    if config.upstream.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "upstream.timeout_secs cannot be 0".to_string(),
        ));
    }
    if config.telegram.bot_token.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "telegram.bot_token cannot be empty".to_string(),
        ));
    }

    Ok(())
}
