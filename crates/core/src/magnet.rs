//! Magnet link construction.

use thiserror::Error;

/// Failures when building a magnet link.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MagnetError {
    /// The info hash is empty.
    #[error("Info hash must not be empty")]
    InvalidInfoHash,
}

/// Builds magnet URIs from info hashes.
///
/// The tracker suffix comes from configuration and is appended verbatim;
/// its internal structure (typically a run of `&tr=` parameters) is opaque
/// here. Hex format/length of the hash is not validated beyond
/// non-emptiness — the upstream index owns its identifiers.
#[derive(Debug, Clone)]
pub struct MagnetLinkBuilder {
    tracker_suffix: String,
}

impl MagnetLinkBuilder {
    pub fn new(tracker_suffix: impl Into<String>) -> Self {
        Self {
            tracker_suffix: tracker_suffix.into(),
        }
    }

    /// Build a magnet URI for `info_hash`, appending the configured tracker
    /// suffix when `include_trackers` is set.
    pub fn build(&self, info_hash: &str, include_trackers: bool) -> Result<String, MagnetError> {
        let info_hash = info_hash.trim();
        if info_hash.is_empty() {
            return Err(MagnetError::InvalidInfoHash);
        }

        let mut link = format!("magnet:?xt=urn:btih:{}", info_hash);
        if include_trackers {
            link.push_str(&self.tracker_suffix);
        }
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_trackers() {
        let builder = MagnetLinkBuilder::new("&tr=udp://tracker.example:80");
        assert_eq!(
            builder.build("ABCD1234", true).unwrap(),
            "magnet:?xt=urn:btih:ABCD1234&tr=udp://tracker.example:80"
        );
    }

    #[test]
    fn test_build_without_trackers() {
        let builder = MagnetLinkBuilder::new("&tr=udp://tracker.example:80");
        assert_eq!(
            builder.build("ABCD1234", false).unwrap(),
            "magnet:?xt=urn:btih:ABCD1234"
        );
    }

    #[test]
    fn test_tracker_suffix_is_exact_concatenation() {
        let builder = MagnetLinkBuilder::new("&tr=udp://a:1&tr=udp://b:2");
        let bare = builder.build("FF00", false).unwrap();
        let full = builder.build("FF00", true).unwrap();
        assert_eq!(full, format!("{}&tr=udp://a:1&tr=udp://b:2", bare));
    }

    #[test]
    fn test_empty_suffix_is_noop() {
        let builder = MagnetLinkBuilder::new("");
        assert_eq!(
            builder.build("FF00", true).unwrap(),
            builder.build("FF00", false).unwrap()
        );
    }

    #[test]
    fn test_empty_hash_fails() {
        let builder = MagnetLinkBuilder::new("");
        assert_eq!(
            builder.build("", true).unwrap_err(),
            MagnetError::InvalidInfoHash
        );
        assert_eq!(
            builder.build("   ", false).unwrap_err(),
            MagnetError::InvalidInfoHash
        );
    }
}
