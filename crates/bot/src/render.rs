//! User-facing message rendering.
//!
//! Turns core results and typed failures into plain-data replies the
//! transport can send: text plus optional inline-keyboard button rows.

use magnetar_core::{BotError, MagnetError, ParseError, SearchError, TorrentRecord};

use crate::dispatch::torrent_token;

/// An inline-keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub callback_data: String,
}

/// A reply to send back to the chat: text and optional button rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub buttons: Vec<Vec<Button>>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: Vec::new(),
        }
    }
}

pub fn welcome_text() -> String {
    "Welcome !!".to_string()
}

pub fn help_text() -> String {
    [
        "This bot returns the list of top 10 torrents for a search term, sorted by seeders.",
        "1) Send a command in the form: torrent - <YOUR_SEARCH_TERM> - <CATEGORY> - <SUBCATEGORY>",
        "   Without category and subcategory, all categories are searched.",
        "2) You get the top 10 matches as buttons: <Number of seeders> - <Title>",
        "3) Tap an item to receive its magnet link.",
        "For the list of available categories send /categories",
    ]
    .join("\n")
}

/// Render ranked results as one button row per torrent, keyed by info hash.
pub fn results_reply(results: &[TorrentRecord]) -> Reply {
    if results.is_empty() {
        return Reply::text("No results found.");
    }

    Reply {
        text: "Click on the item to get magnet link:\nSeeders - Title".to_string(),
        buttons: results
            .iter()
            .map(|r| {
                vec![Button {
                    label: format!("{} - {}", r.seeders, r.name),
                    callback_data: torrent_token(&r.info_hash),
                }]
            })
            .collect(),
    }
}

/// Map a typed core failure to the message shown to the user.
pub fn error_text(err: &BotError) -> String {
    match err {
        BotError::Parse(ParseError::EmptyQuery) => {
            "Please provide a search term: torrent - <YOUR_SEARCH_TERM>".to_string()
        }
        BotError::Parse(ParseError::IncompleteCategoryPair) => {
            "Category and subcategory must be given together. Send /categories for the list."
                .to_string()
        }
        BotError::Parse(ParseError::InvalidCategory { .. }) | BotError::Category(_) => {
            "Invalid category - subcategory combination. Send /categories for the list.".to_string()
        }
        BotError::Search(SearchError::UpstreamUnavailable(_)) => {
            "The torrent index is not reachable right now, please try again.".to_string()
        }
        BotError::Search(SearchError::UpstreamMalformed(_))
        | BotError::Search(SearchError::MalformedRecord { .. }) => {
            "The torrent index returned an unexpected response, please try again.".to_string()
        }
        BotError::Magnet(MagnetError::InvalidInfoHash) => {
            "That selection is no longer valid, please search again.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, seeders: u64, info_hash: &str) -> TorrentRecord {
        TorrentRecord {
            name: name.to_string(),
            seeders,
            info_hash: info_hash.to_string(),
        }
    }

    #[test]
    fn test_results_reply_buttons() {
        let reply = results_reply(&[
            record("Ubuntu 20.04", 500, "EF567890"),
            record("Ubuntu 22.04", 120, "ABCD1234"),
        ]);

        assert_eq!(reply.buttons.len(), 2);
        assert_eq!(reply.buttons[0][0].label, "500 - Ubuntu 20.04");
        assert_eq!(reply.buttons[0][0].callback_data, "get-torrent-EF567890");
        assert_eq!(reply.buttons[1][0].callback_data, "get-torrent-ABCD1234");
    }

    #[test]
    fn test_results_reply_empty() {
        let reply = results_reply(&[]);
        assert!(reply.buttons.is_empty());
        assert_eq!(reply.text, "No results found.");
    }

    #[test]
    fn test_error_text_per_kind() {
        let invalid = BotError::Parse(ParseError::InvalidCategory {
            category: "applications".to_string(),
            subcategory: "atari".to_string(),
        });
        assert!(error_text(&invalid).contains("Invalid category"));

        let unavailable =
            BotError::Search(SearchError::UpstreamUnavailable("refused".to_string()));
        assert!(error_text(&unavailable).contains("not reachable"));

        let empty = BotError::Parse(ParseError::EmptyQuery);
        assert!(error_text(&empty).contains("search term"));
    }

    #[test]
    fn test_help_mentions_command_shape() {
        let help = help_text();
        assert!(help.contains("torrent - <YOUR_SEARCH_TERM>"));
        assert!(help.contains("/categories"));
    }
}
