//! Mock searcher for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::search::{RawRecord, SearchError, Searcher};

/// A recorded search call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSearch {
    pub term: String,
    pub code: String,
}

/// Mock implementation of the `Searcher` trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable raw records
/// - Track search calls for assertions
/// - Inject a one-shot failure
#[derive(Debug, Default)]
pub struct MockSearcher {
    /// Configured records to return.
    results: Arc<RwLock<Vec<RawRecord>>>,
    /// Recorded search calls.
    searches: Arc<RwLock<Vec<RecordedSearch>>>,
    /// If set, the next search fails with this error.
    next_error: Arc<RwLock<Option<SearchError>>>,
}

impl MockSearcher {
    /// Create a new mock searcher with empty results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the records to return for subsequent searches.
    pub async fn set_results(&self, results: Vec<RawRecord>) {
        *self.results.write().await = results;
    }

    /// Get recorded search calls.
    pub async fn recorded_searches(&self) -> Vec<RecordedSearch> {
        self.searches.read().await.clone()
    }

    /// Get the number of searches performed.
    pub async fn search_count(&self) -> usize {
        self.searches.read().await.len()
    }

    /// Configure the next search to fail with the given error.
    pub async fn set_next_error(&self, error: SearchError) {
        *self.next_error.write().await = Some(error);
    }
}

#[async_trait]
impl Searcher for MockSearcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, term: &str, code: &str) -> Result<Vec<RawRecord>, SearchError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.searches.write().await.push(RecordedSearch {
            term: term.to_string(),
            code: code.to_string(),
        });

        Ok(self.results.read().await.clone())
    }
}
