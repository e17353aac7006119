//! The transport-facing entry point.
//!
//! A `SearchOrchestrator` composes command parsing, category lookup, the
//! upstream search and ranking into single calls. It holds no mutable
//! state, so transports may share one instance across concurrent request
//! handlers.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::categories::{CategoryNotFound, CategoryTable};
use crate::command::{parse_command, ParseError};
use crate::magnet::{MagnetError, MagnetLinkBuilder};
use crate::search::{rank, SearchError, Searcher, TorrentRecord};

/// Any failure a transport can get back from the orchestrator.
///
/// All variants are expected, user-recoverable conditions; the transport
/// maps each to a human-readable message. The core never produces
/// user-facing text itself.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Category(#[from] CategoryNotFound),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Magnet(#[from] MagnetError),
}

/// Composes the core components behind the three transport-facing calls.
pub struct SearchOrchestrator {
    categories: &'static CategoryTable,
    searcher: Arc<dyn Searcher>,
    magnet: MagnetLinkBuilder,
}

impl SearchOrchestrator {
    pub fn new(searcher: Arc<dyn Searcher>, magnet: MagnetLinkBuilder) -> Self {
        Self {
            categories: CategoryTable::builtin(),
            searcher,
            magnet,
        }
    }

    /// Formatted category listing for help replies.
    pub fn list_categories(&self) -> String {
        self.categories.list_all()
    }

    /// Run a full search from raw command text: parse, resolve the category
    /// code (empty string means all categories), query the index, rank.
    ///
    /// Fails fast on the first component error; no partial results.
    pub async fn search(&self, raw_text: &str) -> Result<Vec<TorrentRecord>, BotError> {
        let query = parse_command(raw_text, self.categories)?;

        let code = match (&query.category, &query.subcategory) {
            (Some(category), Some(subcategory)) => {
                self.categories.lookup_code(category, subcategory)?
            }
            _ => "",
        };

        debug!(
            term = %query.term,
            code = code,
            backend = self.searcher.name(),
            "Dispatching search"
        );

        let raw_records = self.searcher.search(&query.term, code).await?;
        let ranked = rank(raw_records)?;
        Ok(ranked)
    }

    /// Build the magnet link for a previously returned info hash.
    pub fn resolve_magnet_link(
        &self,
        info_hash: &str,
        include_trackers: bool,
    ) -> Result<String, BotError> {
        Ok(self.magnet.build(info_hash, include_trackers)?)
    }
}
