//! Category/subcategory table for the upstream torrent index.
//!
//! The index addresses categories by numeric codes (e.g. `303` for
//! applications/unix). This module holds the table as an immutable,
//! definition-ordered structure with case-insensitive lookup, so that a
//! missing pair is a first-class `CategoryNotFound` instead of a panicking
//! map index.

use once_cell::sync::Lazy;
use thiserror::Error;

/// Lookup failure for a category/subcategory pair.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown category pair: {category} / {subcategory}")]
pub struct CategoryNotFound {
    pub category: String,
    pub subcategory: String,
}

/// One category with its subcategory → code entries, in definition order.
#[derive(Debug, Clone)]
struct Category {
    name: &'static str,
    subcategories: &'static [(&'static str, &'static str)],
}

/// Immutable mapping from category/subcategory names to upstream codes.
///
/// Names are stored lower-case; lookups lower-case their inputs. Iteration
/// order is the definition order, which `list_all` relies on.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

/// The upstream index's category codes.
static BUILTIN: Lazy<CategoryTable> = Lazy::new(|| CategoryTable {
    categories: vec![
        Category {
            name: "audio",
            subcategories: &[("music", "101"), ("flac", "104"), ("other", "199")],
        },
        Category {
            name: "video",
            subcategories: &[
                ("movies", "201"),
                ("handheld", "206"),
                ("3d", "209"),
                ("other", "299"),
            ],
        },
        Category {
            name: "applications",
            subcategories: &[
                ("windows", "301"),
                ("mac", "302"),
                ("unix", "303"),
                ("handheld", "304"),
                ("ios", "305"),
                ("android", "306"),
                ("other", "399"),
            ],
        },
        Category {
            name: "games",
            subcategories: &[
                ("pc", "401"),
                ("mac", "402"),
                ("psx", "403"),
                ("xbox360", "404"),
                ("wii", "405"),
                ("handheld", "406"),
                ("ios", "407"),
                ("android", "408"),
                ("other", "499"),
            ],
        },
        Category {
            name: "porn",
            subcategories: &[
                ("movies", "501"),
                ("pictures", "503"),
                ("games", "504"),
                ("other", "599"),
            ],
        },
        Category {
            name: "other",
            subcategories: &[
                ("e-books", "601"),
                ("comics", "602"),
                ("pictures", "603"),
                ("covers", "604"),
                ("physibles", "605"),
                ("other", "699"),
            ],
        },
    ],
});

impl CategoryTable {
    /// The compiled-in table of upstream category codes.
    pub fn builtin() -> &'static CategoryTable {
        &BUILTIN
    }

    /// Resolve a category/subcategory pair to its upstream code.
    ///
    /// Case-insensitive on both keys.
    pub fn lookup_code(
        &self,
        category: &str,
        subcategory: &str,
    ) -> Result<&'static str, CategoryNotFound> {
        let category_lower = category.to_lowercase();
        let subcategory_lower = subcategory.to_lowercase();

        self.categories
            .iter()
            .find(|c| c.name == category_lower)
            .and_then(|c| {
                c.subcategories
                    .iter()
                    .find(|(name, _)| *name == subcategory_lower)
                    .map(|(_, code)| *code)
            })
            .ok_or_else(|| CategoryNotFound {
                category: category_lower,
                subcategory: subcategory_lower,
            })
    }

    /// Whether `lookup_code` would succeed for this pair.
    pub fn is_valid_pair(&self, category: &str, subcategory: &str) -> bool {
        self.lookup_code(category, subcategory).is_ok()
    }

    /// Human-readable listing of every category and subcategory, in
    /// definition order. Used for the `/categories` help reply.
    pub fn list_all(&self) -> String {
        let mut out = String::new();
        for category in &self.categories {
            out.push_str(&format!("- {}\n", title_case(category.name)));
            for (subcategory, _) in category.subcategories {
                out.push_str(&format!("  - {}\n", subcategory));
            }
        }
        out
    }
}

/// Upper-case the first letter of each word, matching the display style of
/// the category listing.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
