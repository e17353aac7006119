//! Types for the upstream search system.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A record as returned by the upstream index, before ranking.
///
/// `seeders` is kept as the raw wire value (the index sends either a JSON
/// string or an integer); the ranker parses it and rejects garbage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub name: String,
    #[serde(deserialize_with = "string_or_int")]
    pub seeders: String,
    pub info_hash: String,
}

/// A ranked search result, ready for display.
///
/// `info_hash` is the durable handle: the transport echoes it back later to
/// request a magnet link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentRecord {
    pub name: String,
    pub seeders: u64,
    pub info_hash: String,
}

/// Errors from querying or interpreting the upstream index.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Could not reach the index (connect failure or timeout).
    #[error("Upstream index unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The index answered with something that is not a valid result list.
    #[error("Upstream response malformed: {0}")]
    UpstreamMalformed(String),

    /// A record carried a seeder count that is not a non-negative integer.
    #[error("Malformed record '{name}': bad seeder count '{seeders}'")]
    MalformedRecord { name: String, seeders: String },
}

/// Trait for upstream index backends.
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Execute one search. `code` is an upstream category code, or `""` to
    /// search all categories. No retries, no caching.
    async fn search(&self, term: &str, code: &str) -> Result<Vec<RawRecord>, SearchError>;
}

/// Accept a JSON string or integer, normalized to its string form.
fn string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    Ok(match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s,
        StringOrInt::Int(i) => i.to_string(),
    })
}
