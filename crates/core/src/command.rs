//! Parsing of the `term [- category - subcategory]` search command.
//!
//! The grammar is hyphen-delimited: the input is split at the first two `-`
//! occurrences, so a search term keeps its own hyphens only when no
//! category pair follows. Every segment is trimmed and lower-cased.

use thiserror::Error;

use crate::categories::CategoryTable;

/// A validated search command.
///
/// `category` and `subcategory` are either both present (and known to the
/// category table) or both absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

/// Failures when parsing a search command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The search term is empty after trimming.
    #[error("Empty search term")]
    EmptyQuery,

    /// A category was given without a subcategory, or vice versa.
    #[error("Category and subcategory must be given together")]
    IncompleteCategoryPair,

    /// The category/subcategory pair is not in the table.
    #[error("Invalid category pair: {category} / {subcategory}")]
    InvalidCategory {
        category: String,
        subcategory: String,
    },
}

/// Parse a raw command into a [`SearchQuery`], validating any category pair
/// against `table`.
pub fn parse_command(raw: &str, table: &CategoryTable) -> Result<SearchQuery, ParseError> {
    let mut segments = raw.splitn(3, '-');

    let term = segments
        .next()
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();
    if term.is_empty() {
        return Err(ParseError::EmptyQuery);
    }

    let category = segments
        .next()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let subcategory = segments
        .next()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    match (&category, &subcategory) {
        (None, None) => {}
        (Some(cat), Some(sub)) => {
            if !table.is_valid_pair(cat, sub) {
                return Err(ParseError::InvalidCategory {
                    category: cat.clone(),
                    subcategory: sub.clone(),
                });
            }
        }
        _ => return Err(ParseError::IncompleteCategoryPair),
    }

    Ok(SearchQuery {
        term,
        category,
        subcategory,
    })
}
