//! # Middleware
//!
//! Axum middleware for request stamping and request timing.
//!
//! ## Modules
//!
//! - **[`mw_req_stamp`]**: Request ID stamping
//! - **[`mw_timing`]**: Per-request timing log

// region: --- Modules
pub mod mw_req_stamp;
pub mod mw_timing;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_req_stamp::{stamp_req, RequestStamp};
pub use mw_timing::time_requests;
// endregion: --- Re-exports
