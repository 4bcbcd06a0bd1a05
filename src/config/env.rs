//! Environment presets.
//!
//! Resolves a `LoggerConfig` from `RELAYLOG_*` variables. The logger itself
//! never reads the environment; callers resolve here and pass the result in.

use std::collections::HashMap;

use crate::config::schema::{LoggerConfig, Runtime};
use crate::record::Level;

pub const ENV_RUNTIME: &str = "RELAYLOG_RUNTIME";
pub const ENV_LEVEL: &str = "RELAYLOG_LEVEL";
pub const ENV_HEADER: &str = "RELAYLOG_HEADER";
pub const ENV_CHAT_ID: &str = "RELAYLOG_CHAT_ID";
pub const ENV_BOT_TOKEN: &str = "RELAYLOG_BOT_TOKEN";
pub const ENV_PARSE_MODE: &str = "RELAYLOG_PARSE_MODE";

/// Overlay `RELAYLOG_*` variables from `vars` onto `base`.
///
/// Unparseable values keep the base value and are reported as warnings.
pub fn apply_env_vars<I, K, V>(base: LoggerConfig, vars: I) -> LoggerConfig
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars: HashMap<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .filter(|(k, _)| k.starts_with("RELAYLOG_"))
        .collect();
    let mut config = base;

    if let Some(raw) = vars.get(ENV_RUNTIME) {
        match raw.parse::<Runtime>() {
            Ok(runtime) => config.runtime = runtime,
            Err(e) => tracing::warn!(variable = ENV_RUNTIME, error = %e, "Ignoring invalid runtime"),
        }
    }

    if let Some(raw) = vars.get(ENV_LEVEL) {
        match raw.parse::<Level>() {
            Ok(level) => config.minimum_level = level,
            Err(e) => tracing::warn!(
                variable = ENV_LEVEL,
                error = %e,
                fallback = %config.minimum_level,
                "Ignoring invalid minimum level"
            ),
        }
    }

    if let Some(header) = vars.get(ENV_HEADER).filter(|h| !h.is_empty()) {
        config.header = Some(header.clone());
    }

    if let Some(raw) = vars.get(ENV_CHAT_ID) {
        match raw.trim().parse::<i64>() {
            Ok(chat_id) => config.chat_id = Some(chat_id),
            Err(e) => tracing::warn!(variable = ENV_CHAT_ID, error = %e, "Ignoring invalid chat id"),
        }
    }

    if let Some(token) = vars.get(ENV_BOT_TOKEN).filter(|t| !t.is_empty()) {
        config.bot_token = Some(token.clone());
    }

    if let Some(mode) = vars.get(ENV_PARSE_MODE).filter(|m| !m.is_empty()) {
        config
            .extra_params
            .insert("parse_mode".to_string(), serde_json::Value::String(mode.clone()));
    }

    config
}

/// Resolve a configuration from defaults plus the process environment.
pub fn from_env() -> LoggerConfig {
    apply_env_vars(LoggerConfig::default(), std::env::vars())
}
