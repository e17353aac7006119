//! Ranking of raw search results by seeder count.

use super::{RawRecord, SearchError, TorrentRecord};

/// How many results are handed to the transport.
const MAX_RESULTS: usize = 10;

/// Parse, sort and truncate raw records.
///
/// Records are stable-sorted by seeders descending (upstream order breaks
/// ties) and truncated to the top 10. Any seeder value that does not parse
/// as a non-negative integer fails the whole call with `MalformedRecord`
/// rather than being coerced to 0.
pub fn rank(records: Vec<RawRecord>) -> Result<Vec<TorrentRecord>, SearchError> {
    let mut parsed = records
        .into_iter()
        .map(|r| {
            let seeders = r.seeders.trim().parse::<u64>().map_err(|_| {
                SearchError::MalformedRecord {
                    name: r.name.clone(),
                    seeders: r.seeders.clone(),
                }
            })?;
            Ok(TorrentRecord {
                name: r.name,
                seeders,
                info_hash: r.info_hash,
            })
        })
        .collect::<Result<Vec<_>, SearchError>>()?;

    // Vec::sort_by is stable, preserving upstream order on equal seeders
    parsed.sort_by(|a, b| b.seeders.cmp(&a.seeders));
    parsed.truncate(MAX_RESULTS);

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, seeders: &str, info_hash: &str) -> RawRecord {
        RawRecord {
            name: name.to_string(),
            seeders: seeders.to_string(),
            info_hash: info_hash.to_string(),
        }
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank(vec![
            raw("low", "3", "aa"),
            raw("high", "500", "bb"),
            raw("mid", "42", "cc"),
        ])
        .unwrap();

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
        assert_eq!(ranked[0].seeders, 500);
    }

    #[test]
    fn test_rank_truncates_to_ten() {
        let records: Vec<RawRecord> = (0..25)
            .map(|i| raw(&format!("t{}", i), &i.to_string(), &format!("h{}", i)))
            .collect();

        let ranked = rank(records).unwrap();
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].seeders, 24);
        assert_eq!(ranked[9].seeders, 15);
    }

    #[test]
    fn test_rank_stable_on_ties() {
        let ranked = rank(vec![
            raw("first", "7", "aa"),
            raw("second", "7", "bb"),
            raw("third", "7", "cc"),
        ])
        .unwrap();

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank(vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_rank_idempotent() {
        let once = rank(vec![
            raw("a", "9", "aa"),
            raw("b", "100", "bb"),
            raw("c", "9", "cc"),
        ])
        .unwrap();

        let again = rank(
            once.iter()
                .map(|r| raw(&r.name, &r.seeders.to_string(), &r.info_hash))
                .collect(),
        )
        .unwrap();

        assert_eq!(once, again);
    }

    #[test]
    fn test_rank_monotonic_non_increasing() {
        let ranked = rank(vec![
            raw("a", "1", "aa"),
            raw("b", "30", "bb"),
            raw("c", "30", "cc"),
            raw("d", "0", "dd"),
            raw("e", "999", "ee"),
        ])
        .unwrap();

        for pair in ranked.windows(2) {
            assert!(pair[0].seeders >= pair[1].seeders);
        }
    }

    #[test]
    fn test_rank_malformed_seeders_fails_whole_call() {
        let result = rank(vec![
            raw("good", "10", "aa"),
            raw("bad", "lots", "bb"),
            raw("also good", "20", "cc"),
        ]);

        match result {
            Err(SearchError::MalformedRecord { name, seeders }) => {
                assert_eq!(name, "bad");
                assert_eq!(seeders, "lots");
            }
            other => panic!("expected MalformedRecord, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_rank_negative_seeders_is_malformed() {
        assert!(rank(vec![raw("neg", "-1", "aa")]).is_err());
    }
}
