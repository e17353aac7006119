//! Transport-agnostic message handling.
//!
//! The handler owns the dispatch table and the core orchestrator; a
//! transport feeds it message text and callback tokens and sends back the
//! plain-data replies it produces.

use std::sync::Arc;

use tracing::{debug, warn};

use magnetar_core::SearchOrchestrator;

use crate::dispatch::{parse_torrent_token, Command, Dispatcher};
use crate::render::{error_text, help_text, results_reply, welcome_text, Reply};

pub struct BotHandler {
    dispatcher: Dispatcher,
    orchestrator: Arc<SearchOrchestrator>,
    /// Whether resolved magnet links carry the configured tracker suffix.
    /// Telegram delivers links straight to the user, so trackers go in.
    include_trackers: bool,
}

impl BotHandler {
    pub fn new(orchestrator: Arc<SearchOrchestrator>, include_trackers: bool) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            orchestrator,
            include_trackers,
        }
    }

    /// Handle an incoming text message. `None` means the message matched no
    /// command and should be ignored.
    pub async fn handle_message(&self, text: &str) -> Option<Reply> {
        let command = self.dispatcher.dispatch(text)?;
        debug!(?command, "Handling command");

        Some(match command {
            Command::Start => Reply::text(welcome_text()),
            Command::Help => Reply::text(help_text()),
            Command::Categories => Reply::text(self.orchestrator.list_categories()),
            Command::Search(query) => match self.orchestrator.search(&query).await {
                Ok(results) => results_reply(&results),
                Err(err) => {
                    warn!(error = %err, "Search failed");
                    Reply::text(error_text(&err))
                }
            },
        })
    }

    /// Handle an inline-keyboard callback. `None` means the token is not
    /// one of ours.
    pub fn handle_callback(&self, data: &str) -> Option<String> {
        let info_hash = parse_torrent_token(data)?;
        Some(
            match self
                .orchestrator
                .resolve_magnet_link(info_hash, self.include_trackers)
            {
                Ok(link) => link,
                Err(err) => {
                    warn!(error = %err, "Magnet resolution failed");
                    error_text(&err)
                }
            },
        )
    }
}
