//! Colorized, timestamped lines for a human reading a terminal.

use chrono::Local;
use colored::{ColoredString, Colorize};

use crate::record::{Level, Message, LABEL_SEPARATOR};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Render one terminal line:
/// `"<timestamp>: <LEVEL>: <label>:>> <message>"`.
///
/// The label segment is omitted when no label is given. With `ansi` off the
/// line is plain text.
pub fn format_for_terminal(level: Level, message: &Message, label: Option<&str>, ansi: bool) -> String {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    let level_text = if ansi {
        paint(level).to_string()
    } else {
        level.as_str().to_string()
    };
    let label_text = match label {
        Some(label) if ansi => format!("{}{}", label.underline(), LABEL_SEPARATOR),
        Some(label) => format!("{}{}", label, LABEL_SEPARATOR),
        None => String::new(),
    };

    format!("{}: {}: {}{}", timestamp, level_text, label_text, message.render())
}

fn paint(level: Level) -> ColoredString {
    let name = level.as_str();
    match level {
        Level::Trace => name.cyan(),
        Level::Debug => name.blue(),
        Level::Info => name.green(),
        Level::Warn => name.yellow(),
        Level::Error => name.red(),
        Level::Fatal => name.on_red(),
        Level::Unspecified => name.magenta(),
    }
}
