//! HTTP client for the apibay-style upstream index.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::UpstreamConfig;

use super::{RawRecord, SearchError, Searcher};

/// Client for the `q.php` search endpoint of the upstream index.
pub struct ApibayClient {
    client: Client,
    config: UpstreamConfig,
}

impl ApibayClient {
    /// Create a new client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Build the search URL for a term and category code.
    fn build_search_url(&self, term: &str, code: &str) -> String {
        format!(
            "{}/q.php?q={}&cat={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(term),
            urlencoding::encode(code)
        )
    }
}

#[async_trait]
impl Searcher for ApibayClient {
    fn name(&self) -> &str {
        "apibay"
    }

    async fn search(&self, term: &str, code: &str) -> Result<Vec<RawRecord>, SearchError> {
        let url = self.build_search_url(term, code);
        debug!(term = term, code = code, "Querying upstream index");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                SearchError::UpstreamUnavailable(e.to_string())
            } else {
                SearchError::UpstreamMalformed(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::UpstreamMalformed(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let records: Vec<RawRecord> = response
            .json()
            .await
            .map_err(|e| SearchError::UpstreamMalformed(format!("Failed to parse response: {}", e)))?;

        debug!(results = records.len(), "Upstream search complete");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> UpstreamConfig {
        UpstreamConfig {
            base_url: base_url.to_string(),
            timeout_secs: 10,
            user_agent: "test-agent".to_string(),
        }
    }

    #[test]
    fn test_build_search_url() {
        let client = ApibayClient::new(config("https://apibay.example"));
        let url = client.build_search_url("ubuntu server", "303");
        assert_eq!(url, "https://apibay.example/q.php?q=ubuntu%20server&cat=303");
    }

    #[test]
    fn test_build_search_url_trailing_slash() {
        let client = ApibayClient::new(config("https://apibay.example/"));
        let url = client.build_search_url("ubuntu", "");
        assert_eq!(url, "https://apibay.example/q.php?q=ubuntu&cat=");
    }

    #[test]
    fn test_build_search_url_encodes_term() {
        let client = ApibayClient::new(config("https://apibay.example"));
        let url = client.build_search_url("c++ & rust", "601");
        assert!(url.contains("q=c%2B%2B%20%26%20rust"));
    }
}
