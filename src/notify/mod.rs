//! Remote notifier for high-severity records.
//!
//! # Data Flow
//! ```text
//! rendered cloud message
//!     → escape.rs (header + markup escaping per parse_mode)
//!     → client.rs (one POST {api_base}/bot{token}/sendMessage)
//!     → types.rs (status / ok:false classification)
//!     → NotifyError, observed only by the logger's local error record
//! ```
//!
//! # Design Decisions
//! - Best effort: no retry, no queue, no backoff
//! - Missing credentials make the notifier absent, not an error

pub mod client;
pub mod escape;
pub mod types;

pub use client::Notifier;
pub use escape::{compose, escape, ParseMode};
pub use types::{ApiResponse, NotifyError, NotifyResult};
