//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! logger / notifier produce:
//!     → tracing events (internal diagnostics, never the log records themselves)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → logging.rs subscriber (binary only; libraries bring their own)
//!     → any metrics recorder the host installs
//! ```

pub mod logging;
pub mod metrics;
