//! Message payloads and their canonical text form.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;

use serde::Serialize;
use serde_json::Value;

/// Separator placed between a label (or call site) and the message body.
pub const LABEL_SEPARATOR: &str = ":>> ";

/// Anything a caller can hand to the logger.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Plain text, rendered as is.
    Text(String),
    /// Structured data. Objects and arrays are rendered as indented JSON,
    /// primitives by their plain string form.
    Structured(Value),
    /// An error value with name, message and stack.
    Error(ErrorPayload),
}

/// Captured description of an error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPayload {
    pub name: String,
    pub message: String,
    /// Free-form stack text. Platform specific and never parsed.
    pub stack: Option<String>,
}

impl ErrorPayload {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Capture an error's type name, message, cause chain and (when enabled
    /// through `RUST_BACKTRACE`) a backtrace of the capture point.
    pub fn capture<E>(err: &E) -> Self
    where
        E: StdError + ?Sized,
    {
        let mut lines = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            lines.push(format!("    caused by: {}", cause));
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            lines.push(backtrace.to_string());
        }

        Self {
            name: short_type_name(std::any::type_name::<E>()),
            message: err.to_string(),
            stack: if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            },
        }
    }
}

/// `alloc::string::String` → `String`, `my_crate::Wrapper<io::Error>` → `Wrapper`.
fn short_type_name(full: &str) -> String {
    let base = full.split('<').next().unwrap_or(full);
    let name = base.rsplit("::").next().unwrap_or(base).trim_start_matches("dyn ");
    if name.is_empty() {
        "Error".to_string()
    } else {
        name.to_string()
    }
}

impl Message {
    /// Wrap an error value.
    pub fn error<E>(err: &E) -> Self
    where
        E: StdError + ?Sized,
    {
        Message::Error(ErrorPayload::capture(err))
    }

    /// Convert any serializable value into a structured message.
    ///
    /// Serialization failures degrade to a text message describing the
    /// failure rather than propagating it.
    pub fn serialize<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(value) => Message::Structured(value),
            Err(e) => {
                tracing::debug!(error = %e, "Message payload is not serializable, using fallback text");
                Message::Text(format!("[unserializable {}: {}]", std::any::type_name::<T>(), e))
            }
        }
    }

    /// Canonical text without any label.
    pub fn render(&self) -> String {
        match self {
            Message::Text(text) => text.clone(),
            Message::Error(payload) => match &payload.stack {
                Some(stack) => format!("{}: {}\n{}", payload.name, payload.message, stack),
                None => format!("{}: {}", payload.name, payload.message),
            },
            Message::Structured(Value::String(s)) => s.clone(),
            Message::Structured(value @ (Value::Object(_) | Value::Array(_))) => {
                // Value serialization cannot fail: keys are always strings.
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Message::Structured(value) => value.to_string(),
        }
    }
}

/// Canonical text of a message, prefixed with `"<label>:>> "` when a label
/// is given.
pub fn normalize(message: &Message, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{}{}{}", label, LABEL_SEPARATOR, message.render()),
        None => message.render(),
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::Structured(value)
    }
}

impl From<ErrorPayload> for Message {
    fn from(payload: ErrorPayload) -> Self {
        Message::Error(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fmt;

    #[derive(Debug)]
    struct Boom {
        cause: Option<std::io::Error>,
    }

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl StdError for Boom {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.cause.as_ref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn test_text_passthrough() {
        assert_eq!(normalize(&Message::from("x"), None), "x");
    }

    #[test]
    fn test_label_prefix() {
        assert_eq!(normalize(&Message::from("x"), Some("db")), "db:>> x");
    }

    #[test]
    fn test_error_with_stack() {
        let payload = ErrorPayload::new("Error", "boom").with_stack("    at main");
        assert_eq!(
            normalize(&Message::from(payload), None),
            "Error: boom\n    at main"
        );
    }

    #[test]
    fn test_captured_error_contains_name_message_and_causes() {
        let err = Boom {
            cause: Some(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire")),
        };
        let text = normalize(&Message::error(&err), None);
        assert!(text.starts_with("Boom: boom"), "{}", text);
        assert!(text.contains("caused by: disk on fire"), "{}", text);
    }

    #[test]
    fn test_captured_error_without_causes() {
        let err = Boom { cause: None };
        let payload = ErrorPayload::capture(&err);
        assert_eq!(payload.name, "Boom");
        assert_eq!(payload.message, "boom");
    }

    #[test]
    fn test_object_is_indented_json_that_round_trips() {
        let value = json!({"user": {"id": 7, "tags": ["a", "b"]}});
        let text = normalize(&Message::from(value.clone()), None);
        assert!(text.contains("\n  \"user\": {"), "{}", text);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_primitives_use_plain_form() {
        assert_eq!(Message::from(json!("quoted?")).render(), "quoted?");
        assert_eq!(Message::from(json!(42)).render(), "42");
        assert_eq!(Message::from(json!(true)).render(), "true");
        assert_eq!(Message::from(json!(null)).render(), "null");
    }

    #[test]
    fn test_serialize_failure_degrades_to_text() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(vec![1u8], "non-string key");
        match Message::serialize(&map) {
            Message::Text(text) => assert!(text.starts_with("[unserializable")),
            other => panic!("expected fallback text, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_does_not_consume_input() {
        let msg = Message::from(json!({"a": 1}));
        let first = normalize(&msg, Some("l"));
        let second = normalize(&msg, Some("l"));
        assert_eq!(first, second);
        assert_eq!(msg, Message::from(json!({"a": 1})));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("std::io::error::Error"), "Error");
        assert_eq!(short_type_name("app::Wrapper<std::io::Error>"), "Wrapper");
        assert_eq!(short_type_name("Plain"), "Plain");
    }
}
