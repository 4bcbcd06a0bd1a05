//! Structured records for cloud log ingestion.

use std::panic::Location;

use serde::Serialize;

use crate::record::{normalize, Level, Message, LABEL_SEPARATOR};

/// One structured log record: `{"level": "ERROR", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudRecord {
    pub level: &'static str,
    pub message: String,
}

impl CloudRecord {
    /// Single-line JSON form written to the console.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            // Unreachable for two string fields; keep the line parseable anyway.
            tracing::debug!(error = %e, "Failed to serialize cloud record");
            format!("{{\"level\":\"{}\",\"message\":\"\"}}", self.level)
        })
    }
}

/// Build the structured record for a call.
///
/// When `caller` is given the message is prefixed with `"<file>:<line>:>> "`.
pub fn format_for_cloud(
    level: Level,
    message: &Message,
    label: Option<&str>,
    caller: Option<&Location<'_>>,
) -> CloudRecord {
    let text = normalize(message, label);
    let message = match caller {
        Some(location) => format!(
            "{}:{}{}{}",
            location.file(),
            location.line(),
            LABEL_SEPARATOR,
            text
        ),
        None => text,
    };

    CloudRecord {
        level: level.as_str(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ErrorPayload;
    use serde_json::{json, Value};

    #[test]
    fn test_level_is_upper_case() {
        let record = format_for_cloud(Level::Warn, &Message::from("careful"), None, None);
        assert_eq!(record.level, "WARN");
        assert_eq!(record.message, "careful");
    }

    #[test]
    fn test_error_record() {
        let payload = ErrorPayload::new("Error", "boom").with_stack("    at handler");
        let record = format_for_cloud(Level::Error, &Message::from(payload), None, None);
        assert_eq!(record.level, "ERROR");
        assert_eq!(record.message, "Error: boom\n    at handler");
    }

    #[test]
    fn test_unspecified_level() {
        let record = format_for_cloud(Level::from_name_lenient("loud"), &Message::from("x"), None, None);
        assert_eq!(record.level, "UNSPECIFIED");
    }

    #[test]
    fn test_label_and_caller_prefix() {
        let location = Location::caller();
        let record = format_for_cloud(Level::Info, &Message::from("x"), Some("jobs"), Some(location));
        let expected = format!("{}:{}:>> jobs:>> x", location.file(), location.line());
        assert_eq!(record.message, expected);
    }

    #[test]
    fn test_json_line_is_single_line_and_parseable() {
        let record = format_for_cloud(Level::Info, &Message::from(json!({"a": [1, 2]})), None, None);
        let line = record.to_json_line();
        assert!(!line.contains('\n'));
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["level"], "INFO");
        let inner: Value = serde_json::from_str(parsed["message"].as_str().unwrap()).unwrap();
        assert_eq!(inner, json!({"a": [1, 2]}));
    }
}
