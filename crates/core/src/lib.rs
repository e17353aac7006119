pub mod categories;
pub mod command;
pub mod config;
pub mod magnet;
pub mod orchestrator;
pub mod search;
pub mod testing;

pub use categories::{CategoryNotFound, CategoryTable};
pub use command::{parse_command, ParseError, SearchQuery};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, MagnetConfig,
    TelegramConfig, UpstreamConfig,
};
pub use magnet::{MagnetError, MagnetLinkBuilder};
pub use orchestrator::{BotError, SearchOrchestrator};
pub use search::{ApibayClient, RawRecord, SearchError, Searcher, TorrentRecord};
