//! Testing utilities and mock implementations.
//!
//! Mock implementations of the core's external service traits, so the
//! orchestrator and the transport crate can be tested without touching the
//! real upstream index.

mod mock_searcher;

pub use mock_searcher::{MockSearcher, RecordedSearch};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::search::RawRecord;

    /// Create a raw upstream record.
    pub fn raw_record(name: &str, seeders: &str, info_hash: &str) -> RawRecord {
        RawRecord {
            name: name.to_string(),
            seeders: seeders.to_string(),
            info_hash: info_hash.to_string(),
        }
    }
}
