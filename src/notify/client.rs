//! Chat API client.
//!
//! # Responsibilities
//! - Compose and escape outbound text
//! - Issue one `sendMessage` POST per notification
//! - Classify transport, status and API-level failures
//!
//! No retry and no queue: a failed send is reported once to the caller,
//! which only logs it.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};

use crate::config::validation::RESERVED_PARAMS;
use crate::config::LoggerConfig;
use crate::notify::escape::{compose, escape, ParseMode};
use crate::notify::types::{ApiResponse, NotifyError, NotifyResult, SendMessage};

/// Best-effort sender for a single chat.
#[derive(Clone)]
pub struct Notifier {
    client: Client,
    endpoint: String,
    chat_id: i64,
    header: Option<String>,
    extra_params: Map<String, Value>,
    parse_mode: ParseMode,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("chat_id", &self.chat_id)
            .field("header", &self.header)
            .field("parse_mode", &self.parse_mode)
            .finish_non_exhaustive()
    }
}

impl Notifier {
    /// Build a notifier from configuration.
    ///
    /// Returns `None` when credentials are missing, which turns every
    /// notification into a silent no-op.
    pub fn from_config(config: &LoggerConfig) -> Option<Self> {
        if !config.has_credentials() {
            return None;
        }
        let chat_id = config.chat_id?;
        let token = config.bot_token.as_deref()?;

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = match builder.build() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build notification client, using defaults");
                Client::new()
            }
        };

        Some(Self::with_client(client, config, chat_id, token))
    }

    fn with_client(client: Client, config: &LoggerConfig, chat_id: i64, token: &str) -> Self {
        let extra_params = config
            .extra_params
            .iter()
            .filter(|(key, _)| !RESERVED_PARAMS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            client,
            endpoint: format!("{}/bot{}/sendMessage", config.api_base.trim_end_matches('/'), token),
            chat_id,
            header: config.header.clone(),
            extra_params,
            parse_mode: ParseMode::from_param(config.parse_mode()),
        }
    }

    /// Final outbound text for `message`: header, then escaping.
    pub fn outbound_text(&self, message: &str) -> String {
        escape(&compose(self.header.as_deref(), message), self.parse_mode)
    }

    /// Send `message` once.
    pub async fn send(&self, message: &str) -> NotifyResult<()> {
        let text = self.outbound_text(message);
        let body = SendMessage {
            chat_id: self.chat_id,
            text: &text,
            extra: &self.extra_params,
        };

        // The endpoint URL embeds the bot token; keep it out of error text.
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url()))?;
        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url()))?;

        if !status.is_success() {
            // The API also reports failures in the body; prefer its description.
            if let Ok(envelope) = serde_json::from_str::<ApiResponse>(&raw) {
                if !envelope.ok {
                    envelope.into_result()?;
                }
            }
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body: raw,
            });
        }

        let envelope: ApiResponse = serde_json::from_str(&raw)
            .map_err(|e| NotifyError::MalformedResponse(format!("{}: {}", e, truncate(&raw, 200))))?;
        envelope.into_result()?;

        tracing::debug!(chat_id = self.chat_id, "Notification delivered");
        Ok(())
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
