//! Sink formatters.
//!
//! Two independent renderings of the same record:
//! - `cloud`: `{"level": "INFO", "message": "..."}` JSON for log ingestion
//! - `terminal`: timestamped, colorized line for local development
//!
//! Both are pure apart from the terminal timestamp. The dispatcher picks one
//! per call from the configured `Runtime`.

pub mod cloud;
pub mod terminal;

pub use cloud::{format_for_cloud, CloudRecord};
pub use terminal::format_for_terminal;
