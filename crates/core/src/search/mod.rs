//! Upstream torrent index search.
//!
//! A `Searcher` issues one query against the index and returns raw records;
//! the ranker turns those into the seeder-ordered top-10 handed to the
//! transport.

mod apibay;
mod ranker;
mod types;

pub use apibay::ApibayClient;
pub use ranker::rank;
pub use types::*;
