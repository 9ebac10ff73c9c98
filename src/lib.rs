//! Subtitle-sync status row renderer
//!
//! Renders the current status of one subtitle-synchronization job as a status
//! row: an icon, the normalized file path, a human-readable detail line, and
//! three fixed action icons (close / view / alternatives).
//!
//! The crate is a pure, stateless renderer. The external workflow engine that
//! owns the job feeds one [`StatusPayload`] snapshot per render call; rendering
//! produces a framework-agnostic [`StatusRow`] tree. The search, upload and
//! download work itself happens elsewhere - this component only observes status
//! snapshots.
//!
//! Module layout:
//! - `model`: payload data model (typed status union + driver JSON boundary)
//! - `registry`: status code -> presentation descriptor table
//! - `render`: presentation tree types and the pure render functions
//! - `ui`: ratatui adapter for compositing a row into a terminal frame

pub mod model;
pub mod registry;
pub mod render;
pub mod ui;

pub use model::wire::{PayloadError, WireDownload, WirePayload};
pub use model::{JobState, StatusCode, StatusPayload, SubtitleSource};
pub use registry::{descriptor, unknown_descriptor, Descriptor, DetailError, IconId};
pub use render::{normalize_path, render, render_wire, ActionsBlock, InfoBlock, StatusRow};
