//! Metrics collection.
//!
//! # Metrics
//! - `relaylog_records_total` (counter): records written, by level
//! - `relaylog_records_filtered_total` (counter): calls dropped by the gate, by level
//! - `relaylog_notifications_total` (counter): notification attempts, by outcome
//!
//! # Design Decisions
//! - Uses the `metrics` facade; nothing is recorded until the host installs a recorder
//! - Label values come from fixed sets, never from message text

use crate::record::Level;

/// Outcome label for notification attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationOutcome {
    Delivered,
    Failed,
    Skipped,
}

impl NotificationOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            NotificationOutcome::Delivered => "delivered",
            NotificationOutcome::Failed => "failed",
            NotificationOutcome::Skipped => "skipped",
        }
    }
}

pub fn record_written(level: Level) {
    metrics::counter!("relaylog_records_total", "level" => level.name()).increment(1);
}

pub fn record_filtered(level: Level) {
    metrics::counter!("relaylog_records_filtered_total", "level" => level.name()).increment(1);
}

pub fn record_notification(outcome: NotificationOutcome) {
    metrics::counter!("relaylog_notifications_total", "outcome" => outcome.as_str()).increment(1);
}
