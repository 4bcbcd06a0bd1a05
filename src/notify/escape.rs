//! Markup escaping for notification text.
//!
//! One policy per rendering mode:
//! - `MarkdownV2`: every reserved character, backslash included, gets a backslash
//! - `Markdown` (legacy): only underscore, asterisk, backtick and `[` are escaped
//! - `HTML`: `&`, `<`, `>` become entities
//! - plain: text is sent unchanged

/// Rendering mode of the chat API, taken from the `parse_mode` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Plain,
    MarkdownV2,
    Markdown,
    Html,
}

impl ParseMode {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(mode) if mode.eq_ignore_ascii_case("markdownv2") => ParseMode::MarkdownV2,
            Some(mode) if mode.eq_ignore_ascii_case("markdown") => ParseMode::Markdown,
            Some(mode) if mode.eq_ignore_ascii_case("html") => ParseMode::Html,
            _ => ParseMode::Plain,
        }
    }
}

const MARKDOWN_V2_RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

const MARKDOWN_RESERVED: &[char] = &['_', '*', '`', '['];

/// Escape `text` for the given rendering mode.
pub fn escape(text: &str, mode: ParseMode) -> String {
    match mode {
        ParseMode::Plain => text.to_string(),
        ParseMode::MarkdownV2 => escape_with_backslash(text, MARKDOWN_V2_RESERVED),
        ParseMode::Markdown => escape_with_backslash(text, MARKDOWN_RESERVED),
        ParseMode::Html => escape_html(text),
    }
}

/// Prefix every reserved character with a backslash. The input is treated as
/// literal text, so a backslash already present is escaped like any other
/// reserved character.
fn escape_with_backslash(text: &str, reserved: &[char]) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if reserved.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Outbound text: the header on its own line, then the message.
pub fn compose(header: Option<&str>, message: &str) -> String {
    match header {
        Some(header) if !header.is_empty() => format!("{}\n{}", header, message),
        _ => message.to_string(),
    }
}
