//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that notifier credentials come in pairs
//! - Validate the API base URL and timeout range
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::LoggerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("chat_id is set but bot_token is missing")]
    MissingBotToken,

    #[error("bot_token is set but chat_id is missing")]
    MissingChatId,

    #[error("bot_token must not be blank")]
    BlankBotToken,

    #[error("api_base '{0}' is not a valid http(s) URL")]
    InvalidApiBase(String),

    #[error("extra_params must not override '{0}'")]
    ReservedParam(String),

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Keys the notifier always sets itself.
pub const RESERVED_PARAMS: [&str; 2] = ["chat_id", "text"];

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match (&config.chat_id, &config.bot_token) {
        (Some(_), None) => errors.push(ValidationError::MissingBotToken),
        (None, Some(_)) => errors.push(ValidationError::MissingChatId),
        _ => {}
    }
    if config.bot_token.as_deref().is_some_and(|t| t.trim().is_empty()) {
        errors.push(ValidationError::BlankBotToken);
    }

    match Url::parse(&config.api_base) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidApiBase(config.api_base.clone())),
    }

    for key in RESERVED_PARAMS {
        if config.extra_params.contains_key(key) {
            errors.push(ValidationError::ReservedParam(key.to_string()));
        }
    }

    if config.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
