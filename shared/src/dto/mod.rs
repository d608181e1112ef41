//! # Data Transfer Objects (DTOs)
//!
//! Data structures used for communication with the REST API.
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Missing request fields**: filled in via `#[serde(default)]` so that
//!   validation happens in the handler, not during deserialization
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod task;

pub use task::*;
