//! Severity levels and their ranks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a log call.
///
/// Ranks are strictly increasing in declaration order. `Unspecified` sits
/// above every real level so that direct notification sends are never
/// filtered by the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Trace = 10,
    #[default]
    Debug = 20,
    Info = 30,
    #[serde(alias = "warning")]
    Warn = 40,
    Error = 50,
    Fatal = 60,
    Unspecified = 70,
}

/// Error returned when a level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}' (expected trace, debug, info, warn, error, fatal or unspecified)")]
pub struct LevelParseError(pub String);

impl Level {
    /// Every level, lowest rank first.
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Unspecified,
    ];

    /// Numeric rank used by the threshold gate.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case name written into structured records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Unspecified => "UNSPECIFIED",
        }
    }

    /// Lower-case name, as accepted in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Unspecified => "unspecified",
        }
    }

    /// Parse a level name, mapping anything unknown to `Unspecified`.
    ///
    /// Used for requested levels coming from untyped callers: an unknown
    /// request always passes the gate and is labelled `UNSPECIFIED`.
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or(Level::Unspecified)
    }

    /// Whether the level passes a gate configured with `minimum`.
    pub const fn passes(self, minimum: Level) -> bool {
        self.rank() >= minimum.rank()
    }

    /// Error and fatal records are forwarded to the remote notifier.
    pub const fn notifies(self) -> bool {
        matches!(self, Level::Error | Level::Fatal)
    }

    /// Error and fatal records go to standard error.
    pub const fn uses_error_stream(self) -> bool {
        matches!(self, Level::Error | Level::Fatal)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "unspecified" => Ok(Level::Unspecified),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}
