//! Log records: severity ranking and message normalization.
//!
//! # Data Flow
//! ```text
//! caller value (text / serde_json::Value / error)
//!     → Message (owned, immutable)
//!     → normalize(message, label) → canonical text
//!     → format::{cloud, terminal}
//! ```
//!
//! # Design Decisions
//! - Records are request-scoped; nothing here is stored
//! - Normalization never fails: unserializable payloads degrade to text

pub mod level;
pub mod message;

pub use level::{Level, LevelParseError};
pub use message::{normalize, ErrorPayload, Message, LABEL_SEPARATOR};
