//! Wire types and error definitions for the chat API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Connection, TLS or timeout failure. Carries no URL.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("notification endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The endpoint answered `ok: false`.
    #[error("notification rejected ({error_code}): {description}")]
    Rejected { error_code: i64, description: String },

    /// The response body was not the expected JSON envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type for notification operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Outbound `sendMessage` body.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(flatten)]
    pub extra: &'a Map<String, Value>,
}

/// Response envelope: `{ok: true, result}` or `{ok: false, error_code, description}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ApiResponse {
    pub fn into_result(self) -> NotifyResult<Value> {
        if self.ok {
            Ok(self.result.unwrap_or(Value::Null))
        } else {
            Err(NotifyError::Rejected {
                error_code: self.error_code.unwrap_or_default(),
                description: self.description.unwrap_or_else(|| "no description".to_string()),
            })
        }
    }
}
