//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::record::Level;

/// Default notification API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Where the process runs; selects the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    /// Human-readable terminal lines.
    Local,
    /// Structured JSON records.
    #[default]
    Cloud,
}

/// Unknown runtime name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown runtime '{0}' (expected local or cloud)")]
pub struct RuntimeParseError(pub String);

impl std::str::FromStr for Runtime {
    type Err = RuntimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Runtime::Local),
            "cloud" => Ok(Runtime::Cloud),
            other => Err(RuntimeParseError(other.to_string())),
        }
    }
}

/// Root configuration for a logger. Immutable once a logger is built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Formatter selection (local → terminal, cloud → structured).
    pub runtime: Runtime,

    /// Optional first line of every remote notification.
    pub header: Option<String>,

    /// Calls ranked below this level are dropped.
    pub minimum_level: Level,

    /// Chat or group identifier for notifications.
    pub chat_id: Option<i64>,

    /// Bot credential for the notification API.
    pub bot_token: Option<String>,

    /// Notification API base URL.
    pub api_base: String,

    /// Prefix structured records with the caller's `file:line`.
    pub caller_location: bool,

    /// Emit ANSI colors in terminal lines.
    pub ansi: bool,

    /// Notification request timeout in seconds (transport default when unset).
    pub request_timeout_secs: Option<u64>,

    /// Extra fields merged into every notification payload (e.g. `parse_mode`).
    /// Must stay the last field: TOML tables follow plain values.
    pub extra_params: Map<String, Value>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            runtime: Runtime::Cloud,
            header: None,
            minimum_level: Level::Debug,
            chat_id: None,
            bot_token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            caller_location: false,
            ansi: true,
            request_timeout_secs: None,
            extra_params: Map::new(),
        }
    }
}

impl LoggerConfig {
    /// Whether both notifier credentials are present.
    pub fn has_credentials(&self) -> bool {
        self.chat_id.is_some() && self.bot_token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// The `parse_mode` pass-through parameter, if any.
    pub fn parse_mode(&self) -> Option<&str> {
        self.extra_params.get("parse_mode").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.runtime, Runtime::Cloud);
        assert_eq!(config.minimum_level, Level::Debug);
        assert!(!config.has_credentials());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(config.ansi);
    }

    #[test]
    fn test_minimal_toml() {
        let config: LoggerConfig = toml::from_str(
            r#"
            runtime = "local"
            minimum_level = "info"
            chat_id = -100123
            bot_token = "123:abc"

            [extra_params]
            parse_mode = "MarkdownV2"
            disable_web_page_preview = true
            "#,
        )
        .unwrap();

        assert_eq!(config.runtime, Runtime::Local);
        assert_eq!(config.minimum_level, Level::Info);
        assert_eq!(config.chat_id, Some(-100123));
        assert!(config.has_credentials());
        assert_eq!(config.parse_mode(), Some("MarkdownV2"));
        assert_eq!(config.extra_params.len(), 2);
        assert_eq!(config.header, None);
    }

    #[test]
    fn test_blank_token_is_not_a_credential() {
        let config = LoggerConfig {
            chat_id: Some(1),
            bot_token: Some("  ".into()),
            ..Default::default()
        };
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_runtime_from_str() {
        assert_eq!("LOCAL".parse::<Runtime>().unwrap(), Runtime::Local);
        let err = "Edge".parse::<Runtime>().unwrap_err();
        assert_eq!(err, RuntimeParseError("edge".to_string()));
        assert_eq!(err.to_string(), "unknown runtime 'edge' (expected local or cloud)");
    }
}
