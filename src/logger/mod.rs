//! Severity gate and dispatcher.
//!
//! # Data Flow
//! ```text
//! logger.error(msg, label)
//!     → gate: rank(level) < rank(minimum_level) ⇒ return
//!     → format::{terminal | cloud} by runtime
//!     → sink (stdout, or stderr for error/fatal)
//!     → error/fatal only: spawn notifier task with the cloud message
//!                             ↳ failure ⇒ ungated local ERROR record, never re-notified
//! ```
//!
//! # Design Decisions
//! - Every leveled method reduces to the same `log` path
//! - The notification task is detached; callers may await the returned
//!   `Delivery` but never see its error
//! - No locks: configuration is immutable and shared through `Arc`

mod delivery;

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::config::{LoggerConfig, Runtime};
use crate::format::{format_for_cloud, format_for_terminal};
use crate::notify::Notifier;
use crate::observability::metrics::{self, NotificationOutcome};
use crate::record::{Level, Message};
use crate::sink::{ConsoleSink, Sink, Stream};

pub use delivery::Delivery;

const NOTIFIER_LABEL: &str = "notifier";

/// Cloneable logging handle over one immutable configuration.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    config: LoggerConfig,
    sink: Arc<dyn Sink>,
    notifier: Option<Notifier>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("runtime", &self.inner.config.runtime)
            .field("minimum_level", &self.inner.config.minimum_level)
            .field("notifier", &self.inner.notifier.is_some())
            .finish()
    }
}

impl Logger {
    /// Logger writing to the process console.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, ConsoleSink)
    }

    /// Logger writing to a custom sink.
    pub fn with_sink<S>(config: LoggerConfig, sink: S) -> Self
    where
        S: Sink + 'static,
    {
        let notifier = Notifier::from_config(&config);
        if notifier.is_none() {
            tracing::debug!("Notifier credentials not configured, notifications disabled");
        }

        Self {
            inner: Arc::new(Inner {
                config,
                sink: Arc::new(sink),
                notifier,
            }),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.inner.config
    }

    /// Whether a call at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.inner.config.minimum_level)
    }

    /// Gate, format and write one record.
    ///
    /// For error and fatal records a notification is started in the
    /// background; its handle is returned when one was spawned.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<Message>, label: Option<&str>) -> Option<Delivery> {
        let caller = if self.inner.config.caller_location {
            Some(Location::caller())
        } else {
            None
        };
        let message = message.into();

        let notification = self.emit(level, &message, label, caller)?;
        if level.notifies() {
            self.spawn_notification(notification)
        } else {
            None
        }
    }

    #[track_caller]
    pub fn trace(&self, message: impl Into<Message>, label: Option<&str>) {
        self.log(Level::Trace, message, label);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<Message>, label: Option<&str>) {
        self.log(Level::Debug, message, label);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<Message>, label: Option<&str>) {
        self.log(Level::Info, message, label);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<Message>, label: Option<&str>) {
        self.log(Level::Warn, message, label);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<Message>, label: Option<&str>) -> Option<Delivery> {
        self.log(Level::Error, message, label)
    }

    #[track_caller]
    pub fn fatal(&self, message: impl Into<Message>, label: Option<&str>) -> Option<Delivery> {
        self.log(Level::Fatal, message, label)
    }

    /// Send a notification directly, bypassing the gate and the sinks.
    ///
    /// Resolves once the attempt is over; failures are logged locally.
    pub async fn notify(&self, message: impl Into<Message>, label: Option<&str>) {
        let message = message.into();
        let text = format_for_cloud(Level::Unspecified, &message, label, None).message;

        if self.inner.notifier.is_none() {
            metrics::record_notification(NotificationOutcome::Skipped);
            tracing::debug!("Notification skipped: no credentials configured");
            return;
        }

        let id = Uuid::new_v4();
        self.deliver(&text)
            .instrument(tracing::info_span!("notification", delivery_id = %id))
            .await;
    }

    /// Write one record if the gate permits. Returns the cloud-rendered
    /// message for the notifier.
    fn emit(
        &self,
        level: Level,
        message: &Message,
        label: Option<&str>,
        caller: Option<&Location<'_>>,
    ) -> Option<String> {
        if !self.enabled(level) {
            metrics::record_filtered(level);
            return None;
        }
        Some(self.write_record(level, message, label, caller))
    }

    /// Format and write one record regardless of the gate.
    fn write_record(
        &self,
        level: Level,
        message: &Message,
        label: Option<&str>,
        caller: Option<&Location<'_>>,
    ) -> String {
        let config = &self.inner.config;
        let record = format_for_cloud(level, message, label, caller);
        let line = match config.runtime {
            Runtime::Local => format_for_terminal(level, message, label, config.ansi),
            Runtime::Cloud => record.to_json_line(),
        };
        let stream = if level.uses_error_stream() {
            Stream::Stderr
        } else {
            Stream::Stdout
        };

        self.inner.sink.write(stream, &line);
        metrics::record_written(level);

        record.message
    }

    fn spawn_notification(&self, text: String) -> Option<Delivery> {
        if self.inner.notifier.is_none() {
            return None;
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                metrics::record_notification(NotificationOutcome::Skipped);
                tracing::warn!("Notification skipped: no Tokio runtime available");
                return None;
            }
        };

        let id = Uuid::new_v4();
        let logger = self.clone();
        let span = tracing::info_span!("notification", delivery_id = %id);
        let task = handle.spawn(async move { logger.deliver(&text).await }.instrument(span));

        Some(Delivery::new(id, task))
    }

    async fn deliver(&self, text: &str) {
        let Some(notifier) = &self.inner.notifier else {
            return;
        };

        match notifier.send(text).await {
            Ok(()) => metrics::record_notification(NotificationOutcome::Delivered),
            Err(e) => {
                metrics::record_notification(NotificationOutcome::Failed);
                tracing::error!(error = %e, "Notification delivery failed");
                // Failures are always reported, whatever the configured minimum level.
                let failure = Message::error(&e);
                self.write_record(Level::Error, &failure, Some(NOTIFIER_LABEL), None);
            }
        }
    }
}
