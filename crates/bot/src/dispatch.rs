//! Command dispatch table.
//!
//! Maps incoming message text to bot commands via an explicit list of
//! patterns, so the routing is data rather than SDK decorators and can be
//! tested without any transport.

use regex_lite::Regex;

/// Prefix for inline-keyboard callback tokens carrying an info hash.
const TORRENT_TOKEN_PREFIX: &str = "get-torrent-";

/// A recognized bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Categories,
    /// A search; the payload is the `term [- category - subcategory]` text
    /// handed to the core untouched.
    Search(String),
}

enum RouteKind {
    Start,
    Help,
    Categories,
    Search,
}

struct Route {
    pattern: Regex,
    kind: RouteKind,
}

/// Ordered pattern → command table; first match wins.
pub struct Dispatcher {
    routes: Vec<Route>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        let routes = vec![
            Route {
                pattern: Regex::new(r"^/start\b").unwrap(),
                kind: RouteKind::Start,
            },
            Route {
                pattern: Regex::new(r"^/help\b").unwrap(),
                kind: RouteKind::Help,
            },
            Route {
                pattern: Regex::new(r"^/categories\b").unwrap(),
                kind: RouteKind::Categories,
            },
            // "torrent - <term> [- category - subcategory]"; everything
            // after the first hyphen goes to the core parser
            Route {
                pattern: Regex::new(r"^torrent\s*-\s*\S").unwrap(),
                kind: RouteKind::Search,
            },
        ];
        Self { routes }
    }

    /// Match message text against the table. `None` means the message is
    /// not for this bot and should be ignored.
    pub fn dispatch(&self, text: &str) -> Option<Command> {
        let text = text.trim();
        for route in &self.routes {
            if route.pattern.is_match(text) {
                return Some(match route.kind {
                    RouteKind::Start => Command::Start,
                    RouteKind::Help => Command::Help,
                    RouteKind::Categories => Command::Categories,
                    RouteKind::Search => {
                        let (_, payload) = text.split_once('-').unwrap_or((text, ""));
                        Command::Search(payload.trim().to_string())
                    }
                });
            }
        }
        None
    }
}

/// Build the opaque callback token for a search result.
pub fn torrent_token(info_hash: &str) -> String {
    format!("{}{}", TORRENT_TOKEN_PREFIX, info_hash)
}

/// Recover the info hash from a callback token, if it is one of ours.
pub fn parse_torrent_token(data: &str) -> Option<&str> {
    data.strip_prefix(TORRENT_TOKEN_PREFIX)
}
