//! Internal diagnostics logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber for the binary
//! - Match the diagnostic format to the configured runtime
//!
//! # Design Decisions
//! - JSON format for cloud, ANSI pretty format for local
//! - Filter comes from `RUST_LOG`, falling back to the given default
//! - Diagnostics always go to stderr so they never mix with stdout records

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Runtime;

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init_logging(runtime: Runtime, default_filter: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let result = match runtime {
        Runtime::Cloud => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        Runtime::Local => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.is_ok()
}
