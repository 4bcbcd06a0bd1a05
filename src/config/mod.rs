//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)            RELAYLOG_* variables
//!     → loader.rs (parse)           → env.rs (overlay)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig (validated, immutable)
//!     → moved into Logger at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a logger is built
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Environment sourcing lives here, never in the logger core

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LoggerConfig, Runtime, RuntimeParseError, DEFAULT_API_BASE};
pub use validation::{validate_config, ValidationError};
