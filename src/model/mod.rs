//! Payload Model
//!
//! Data model for one subtitle-sync job snapshot:
//! - status: the typed model (status codes and the per-status job state union)
//! - wire: the JSON boundary with the external workflow driver

pub mod status;
pub mod wire;

pub use status::{JobState, StatusCode, StatusPayload, SubtitleSource};
