//! Structured logging facade with dual sinks and chat notifications.
//!
//! ```text
//! Logger::{trace..fatal}(message, label)
//!     → gate (minimum level)
//!     → record::normalize
//!     → format::{cloud | terminal} → sink (stdout / stderr)
//!     → error/fatal: notify::Notifier (detached, best effort)
//! ```

pub mod config;
pub mod format;
pub mod logger;
pub mod notify;
pub mod observability;
pub mod record;
pub mod sink;

pub use config::{LoggerConfig, Runtime};
pub use logger::{Delivery, Logger};
pub use record::{ErrorPayload, Level, Message};
