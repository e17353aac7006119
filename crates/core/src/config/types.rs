use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub magnet: MagnetConfig,
    pub telegram: TelegramConfig,
}

/// Upstream torrent index configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the index API (e.g. "https://apibay.org")
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// User-Agent header sent with every request. The index rejects some
    /// default client user-agents, so a browser-like one is the default.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u32 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; rv:78.0) Gecko/20100101 Firefox/78.0".to_string()
}

/// Magnet link configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MagnetConfig {
    /// Opaque suffix appended verbatim to magnet links (typically a run of
    /// `&tr=` tracker parameters). May be empty.
    #[serde(default)]
    pub tracker_suffix: String,
}

/// Telegram transport configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramConfig {
    /// Bot API token from BotFather
    pub bot_token: String,
    /// Long-poll timeout in seconds for getUpdates (default: 30)
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u32,
}

fn default_poll_timeout() -> u32 {
    30
}
