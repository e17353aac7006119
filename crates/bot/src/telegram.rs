//! Telegram transport: long polling over the Bot API.
//!
//! Plain reqwest against `api.telegram.org`; no SDK. The poller pulls
//! updates with `getUpdates`, routes them through the [`BotHandler`] and
//! sends replies back with `sendMessage`/`answerCallbackQuery`. Transport
//! errors are logged and the loop keeps going; they never take the process
//! down.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use magnetar_core::TelegramConfig;

use crate::handler::BotHandler;
use crate::render::Reply;

const API_BASE: &str = "https://api.telegram.org";

/// Errors talking to the Bot API.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Telegram connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Telegram API error: {0}")]
    ApiError(String),

    #[error("Request timeout")]
    Timeout,
}

// Bot API response envelope and update payloads. Only the fields we use.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub data: Option<String>,
    pub message: Option<Message>,
}

/// Thin client over the Telegram Bot API.
pub struct TelegramClient {
    client: Client,
    base_url: String,
    poll_timeout_secs: u32,
}

impl TelegramClient {
    pub fn new(config: &TelegramConfig) -> Self {
        Self::with_base_url(config, API_BASE)
    }

    /// Base URL override for tests.
    pub fn with_base_url(config: &TelegramConfig, base_url: &str) -> Self {
        // The HTTP timeout must outlast the long-poll window
        let client = Client::builder()
            .timeout(Duration::from_secs(config.poll_timeout_secs as u64 + 10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!(
                "{}/bot{}",
                base_url.trim_end_matches('/'),
                config.bot_token
            ),
            poll_timeout_secs: config.poll_timeout_secs,
        }
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T, TransportError> {
        let url = format!("{}/{}", self.base_url, method);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else if e.is_connect() {
                    TransportError::ConnectionFailed(e.to_string())
                } else {
                    TransportError::ApiError(e.to_string())
                }
            })?;

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TransportError::ApiError(format!("Failed to parse response: {}", e)))?;

        if !envelope.ok {
            return Err(TransportError::ApiError(
                envelope
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        envelope
            .result
            .ok_or_else(|| TransportError::ApiError("ok response without result".to_string()))
    }

    /// Long-poll for updates after `offset`.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, TransportError> {
        self.call(
            "getUpdates",
            json!({
                "offset": offset,
                "timeout": self.poll_timeout_secs,
                "allowed_updates": ["message", "callback_query"],
            }),
        )
        .await
    }

    /// Send a text message, with an inline keyboard when the reply has
    /// button rows.
    pub async fn send_reply(&self, chat_id: i64, reply: &Reply) -> Result<(), TransportError> {
        let mut body = json!({
            "chat_id": chat_id,
            "text": reply.text,
        });

        if !reply.buttons.is_empty() {
            let keyboard: Vec<Vec<serde_json::Value>> = reply
                .buttons
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|b| json!({ "text": b.label, "callback_data": b.callback_data }))
                        .collect()
                })
                .collect();
            body["reply_markup"] = json!({ "inline_keyboard": keyboard });
        }

        self.call::<Message>("sendMessage", body).await.map(|_| ())
    }

    /// Acknowledge a callback query so the client stops its spinner.
    pub async fn answer_callback_query(&self, callback_id: &str) -> Result<(), TransportError> {
        self.call::<bool>("answerCallbackQuery", json!({ "callback_query_id": callback_id }))
            .await
            .map(|_| ())
    }
}

/// Run the long-poll loop until `shutdown` resolves.
pub async fn run_poller(
    client: &TelegramClient,
    handler: &BotHandler,
    shutdown: impl std::future::Future<Output = ()>,
) {
    tokio::pin!(shutdown);
    let mut offset: i64 = 0;

    info!("Telegram poller started");
    loop {
        let updates = tokio::select! {
            result = client.get_updates(offset) => result,
            _ = &mut shutdown => {
                info!("Telegram poller stopping");
                return;
            }
        };

        let updates = match updates {
            Ok(updates) => updates,
            Err(e) => {
                error!(error = %e, "getUpdates failed, backing off");
                tokio::time::sleep(Duration::from_secs(3)).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            handle_update(client, handler, update).await;
        }
    }
}

async fn handle_update(client: &TelegramClient, handler: &BotHandler, update: Update) {
    if let Some(message) = update.message {
        let Some(text) = message.text else { return };
        debug!(chat_id = message.chat.id, "Incoming message");

        if let Some(reply) = handler.handle_message(&text).await {
            if let Err(e) = client.send_reply(message.chat.id, &reply).await {
                warn!(error = %e, chat_id = message.chat.id, "Failed to send reply");
            }
        }
        return;
    }

    if let Some(callback) = update.callback_query {
        if let Err(e) = client.answer_callback_query(&callback.id).await {
            warn!(error = %e, "Failed to answer callback query");
        }

        let Some(data) = callback.data else { return };
        let Some(chat_id) = callback.message.map(|m| m.chat.id) else {
            return;
        };

        if let Some(text) = handler.handle_callback(&data) {
            if let Err(e) = client.send_reply(chat_id, &Reply::text(text)).await {
                warn!(error = %e, chat_id = chat_id, "Failed to send magnet link");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TelegramConfig {
        TelegramConfig {
            bot_token: "123:abc".to_string(),
            poll_timeout_secs: 30,
        }
    }

    #[test]
    fn test_base_url_includes_token() {
        let client = TelegramClient::with_base_url(&config(), "https://tg.example/");
        assert_eq!(client.base_url, "https://tg.example/bot123:abc");
    }

    #[test]
    fn test_update_deserialization_message() {
        let update: Update = serde_json::from_str(
            r#"{"update_id":7,"message":{"chat":{"id":42},"text":"torrent - ubuntu"}}"#,
        )
        .unwrap();
        assert_eq!(update.update_id, 7);
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, 42);
        assert_eq!(message.text.as_deref(), Some("torrent - ubuntu"));
        assert!(update.callback_query.is_none());
    }

    #[test]
    fn test_update_deserialization_callback() {
        let update: Update = serde_json::from_str(
            r#"{"update_id":8,"callback_query":{"id":"cb1","data":"get-torrent-FF00","message":{"chat":{"id":42},"text":null}}}"#,
        )
        .unwrap();
        let callback = update.callback_query.unwrap();
        assert_eq!(callback.id, "cb1");
        assert_eq!(callback.data.as_deref(), Some("get-torrent-FF00"));
        assert_eq!(callback.message.unwrap().chat.id, 42);
    }

    #[test]
    fn test_api_response_envelope_error() {
        let envelope: ApiResponse<Vec<Update>> =
            serde_json::from_str(r#"{"ok":false,"description":"Unauthorized"}"#).unwrap();
        assert!(!envelope.ok);
        assert_eq!(envelope.description.as_deref(), Some("Unauthorized"));
        assert!(envelope.result.is_none());
    }
}
