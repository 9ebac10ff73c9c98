//! Status View
//!
//! Pure functions for composing one status row out of a job snapshot. Output
//! is a framework-agnostic [`StatusRow`] tree; the `ui` module (or any other
//! host) is responsible for compositing it onto the screen.

use crate::model::wire::WirePayload;
use crate::model::{StatusCode, StatusPayload};
use crate::registry::{self, Descriptor, IconId};

/// Class prefix shared by every row; the literal status code is appended so
/// each status is independently stylable.
const ROW_CLASS_PREFIX: &str = "search flex-row";

/// Detail line shown when a descriptor's detail function reports malformed
/// auxiliary data. The rest of the row (icon, path, actions) still renders.
pub const DETAIL_UNAVAILABLE: &str = "Unable to render status details";

/// The rendered status row: container -> [icon, info, actions].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    /// Styling class, `"search flex-row <code>"`.
    pub class: String,
    /// Status icon for this row.
    pub icon: IconId,
    pub info: InfoBlock,
    pub actions: ActionsBlock,
}

impl StatusRow {
    /// Asset reference for the status icon (`images/icon-<id>.svg`).
    pub fn icon_path(&self) -> String {
        self.icon.asset_path()
    }
}

/// Normalized path plus the detail line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoBlock {
    pub path: String,
    pub detail: String,
}

/// The three fixed action icons. Identical across all statuses and carry no
/// payload-derived data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionsBlock {
    pub close: IconId,
    pub view: IconId,
    pub alternatives: IconId,
}

impl ActionsBlock {
    pub const FIXED: ActionsBlock = ActionsBlock {
        close: IconId::Close,
        view: IconId::View,
        alternatives: IconId::Plus,
    };
}

/// Final `/`-separated segment of a path.
///
/// Literal last-split-segment semantics: a path with no `/` is returned whole,
/// and a path ending in `/` yields the empty string.
pub fn normalize_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn row_class(code: &str) -> String {
    format!("{ROW_CLASS_PREFIX} {code}")
}

fn compose(descriptor: &Descriptor, code: &str, path: &str, detail: String) -> StatusRow {
    StatusRow {
        class: row_class(code),
        icon: descriptor.icon,
        info: InfoBlock {
            path: normalize_path(path).to_string(),
            detail,
        },
        actions: ActionsBlock::FIXED,
    }
}

/// Render one typed job snapshot as a status row.
///
/// Referentially transparent: the same payload always yields the same row, and
/// the payload is never mutated. The typed state union keeps the descriptor's
/// detail function total here; should it still report an error, only the
/// detail line degrades.
pub fn render(payload: &StatusPayload) -> StatusRow {
    let code = payload.code();
    let descriptor = registry::descriptor(code);
    let detail = match (descriptor.detail)(&payload.state) {
        Ok(text) => text,
        Err(_) => DETAIL_UNAVAILABLE.to_string(),
    };
    compose(descriptor, code.as_str(), &payload.path, detail)
}

/// Render one raw driver snapshot, tolerating contract violations.
///
/// A UI must always render something, so this path never fails:
/// - an unrecognized status code yields the deterministic fallback row
///   (error icon, `"Unknown status: <code>"` detail, raw code in the class);
/// - a recognized status with its auxiliary field missing renders its normal
///   icon and path with only the detail line degraded.
pub fn render_wire(wire: &WirePayload) -> StatusRow {
    match StatusCode::from_code(&wire.status) {
        Some(code) => match StatusPayload::try_from(wire.clone()) {
            Ok(payload) => render(&payload),
            Err(_) => compose(
                registry::descriptor(code),
                code.as_str(),
                &wire.path,
                DETAIL_UNAVAILABLE.to_string(),
            ),
        },
        None => compose(
            registry::unknown_descriptor(),
            &wire.status,
            &wire.path,
            format!("Unknown status: {}", wire.status),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobState;

    #[test]
    fn test_normalize_path_takes_last_segment() {
        assert_eq!(normalize_path("a/b/c.srt"), "c.srt");
        assert_eq!(normalize_path("c.srt"), "c.srt");
        assert_eq!(normalize_path("a/b/"), "");
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/movie.mkv"), "movie.mkv");
    }

    #[test]
    fn test_row_class_embeds_the_literal_code() {
        let payload = StatusPayload {
            path: "x.srt".to_string(),
            state: JobState::NotFound,
        };
        assert_eq!(render(&payload).class, "search flex-row notfound");
    }

    #[test]
    fn test_actions_are_fixed() {
        let payload = StatusPayload {
            path: "x.srt".to_string(),
            state: JobState::Init,
        };
        let row = render(&payload);
        assert_eq!(row.actions.close.asset_path(), "images/icon-close.svg");
        assert_eq!(row.actions.view.asset_path(), "images/icon-view.svg");
        assert_eq!(row.actions.alternatives.asset_path(), "images/icon-plus.svg");
    }
}
