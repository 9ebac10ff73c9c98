//! Status Registry
//!
//! The presentation rule for every status code: which icon to show and how to
//! phrase the detail line. The table is an exhaustive match over [`StatusCode`],
//! so adding a status code without a descriptor is a compile error rather than
//! an undefined lookup at render time.

use thiserror::Error;

use crate::model::{JobState, StatusCode};

/// Icon asset identifier, keyed by `.svg` filename stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconId {
    Time,
    Upload,
    Search,
    Download,
    Check,
    CheckSmall,
    Error,
    // Action icons, identical across all statuses
    Close,
    View,
    Plus,
}

impl IconId {
    /// The asset filename stem (e.g. `check-small`).
    pub fn stem(&self) -> &'static str {
        match self {
            IconId::Time => "time",
            IconId::Upload => "upload",
            IconId::Search => "search",
            IconId::Download => "download",
            IconId::Check => "check",
            IconId::CheckSmall => "check-small",
            IconId::Error => "error",
            IconId::Close => "close",
            IconId::View => "view",
            IconId::Plus => "plus",
        }
    }

    /// Resolve the asset reference via the fixed `images/icon-<id>.svg` template.
    pub fn asset_path(&self) -> String {
        format!("images/icon-{}.svg", self.stem())
    }
}

/// A detail function was handed a job state from a different status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("detail for status `{expected}` cannot be derived from a `{actual}` payload")]
pub struct DetailError {
    pub expected: StatusCode,
    pub actual: StatusCode,
}

impl DetailError {
    fn wrong_state(expected: StatusCode, actual: &JobState) -> DetailError {
        DetailError {
            expected,
            actual: actual.code(),
        }
    }
}

/// Produces the human-readable detail line for one status.
///
/// Reads only the auxiliary data belonging to its own status; any other state
/// shape yields a [`DetailError`] instead of a panic.
pub type DetailFn = fn(&JobState) -> Result<String, DetailError>;

/// Presentation rule for one status code.
pub struct Descriptor {
    pub icon: IconId,
    pub detail: DetailFn,
}

fn init_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Init => Ok("Starting search...".to_string()),
        other => Err(DetailError::wrong_state(StatusCode::Init, other)),
    }
}

fn info_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Info => Ok("Loading video information...".to_string()),
        other => Err(DetailError::wrong_state(StatusCode::Info, other)),
    }
}

fn upload_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Upload { filename } => Ok(format!("Uploading {filename} ...")),
        other => Err(DetailError::wrong_state(StatusCode::Upload, other)),
    }
}

fn search_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Search { languages } => {
            Ok(format!("Searching subtitles for languages: {languages}"))
        }
        other => Err(DetailError::wrong_state(StatusCode::Search, other)),
    }
}

fn download_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Download { source } => {
            Ok(format!("Downloading subtitle from server: {}...", source.name))
        }
        other => Err(DetailError::wrong_state(StatusCode::Download, other)),
    }
}

fn downloaded_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Downloaded { source } => Ok(format!(
            "Downloaded from server {} ({})",
            source.name, source.website
        )),
        other => Err(DetailError::wrong_state(StatusCode::Downloaded, other)),
    }
}

fn notfound_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::NotFound => Ok("No subtitles found, try again later".to_string()),
        other => Err(DetailError::wrong_state(StatusCode::NotFound, other)),
    }
}

fn unchanged_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Unchanged => {
            Ok("You already have the subtitle in your preferred language".to_string())
        }
        other => Err(DetailError::wrong_state(StatusCode::Unchanged, other)),
    }
}

fn uploaded_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Uploaded => {
            Ok("Your local subtitles for this video have been shared!".to_string())
        }
        other => Err(DetailError::wrong_state(StatusCode::Uploaded, other)),
    }
}

fn share_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Share => Ok("Sharing the subtitles for this video...".to_string()),
        other => Err(DetailError::wrong_state(StatusCode::Share, other)),
    }
}

fn error_detail(state: &JobState) -> Result<String, DetailError> {
    match state {
        JobState::Error { message } => Ok(format!("Error: {message}")),
        other => Err(DetailError::wrong_state(StatusCode::Error, other)),
    }
}

fn unknown_detail(_state: &JobState) -> Result<String, DetailError> {
    Ok("Unknown status".to_string())
}

static INIT: Descriptor = Descriptor {
    icon: IconId::Time,
    detail: init_detail,
};
static INFO: Descriptor = Descriptor {
    icon: IconId::Time,
    detail: info_detail,
};
static UPLOAD: Descriptor = Descriptor {
    icon: IconId::Upload,
    detail: upload_detail,
};
static SEARCH: Descriptor = Descriptor {
    icon: IconId::Search,
    detail: search_detail,
};
static DOWNLOAD: Descriptor = Descriptor {
    icon: IconId::Download,
    detail: download_detail,
};
static DOWNLOADED: Descriptor = Descriptor {
    icon: IconId::Check,
    detail: downloaded_detail,
};
static NOTFOUND: Descriptor = Descriptor {
    icon: IconId::Error,
    detail: notfound_detail,
};
static UNCHANGED: Descriptor = Descriptor {
    icon: IconId::CheckSmall,
    detail: unchanged_detail,
};
static UPLOADED: Descriptor = Descriptor {
    icon: IconId::Check,
    detail: uploaded_detail,
};
static SHARE: Descriptor = Descriptor {
    icon: IconId::Upload,
    detail: share_detail,
};
static ERROR: Descriptor = Descriptor {
    icon: IconId::Error,
    detail: error_detail,
};
static UNKNOWN: Descriptor = Descriptor {
    icon: IconId::Error,
    detail: unknown_detail,
};

/// Look up the presentation rule for a status code.
///
/// Total over the closed [`StatusCode`] set; there is no undefined lookup.
pub fn descriptor(code: StatusCode) -> &'static Descriptor {
    match code {
        StatusCode::Init => &INIT,
        StatusCode::Info => &INFO,
        StatusCode::Upload => &UPLOAD,
        StatusCode::Search => &SEARCH,
        StatusCode::Download => &DOWNLOAD,
        StatusCode::Downloaded => &DOWNLOADED,
        StatusCode::NotFound => &NOTFOUND,
        StatusCode::Unchanged => &UNCHANGED,
        StatusCode::Uploaded => &UPLOADED,
        StatusCode::Share => &SHARE,
        StatusCode::Error => &ERROR,
    }
}

/// Fallback presentation for status codes the driver sends that fall outside
/// the closed set. The registry never returns this from [`descriptor`]; the
/// lossy render path applies it as its deterministic fallback policy.
pub fn unknown_descriptor() -> &'static Descriptor {
    &UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubtitleSource;

    #[test]
    fn test_asset_paths_follow_the_fixed_template() {
        assert_eq!(IconId::Time.asset_path(), "images/icon-time.svg");
        assert_eq!(IconId::CheckSmall.asset_path(), "images/icon-check-small.svg");
        assert_eq!(IconId::Plus.asset_path(), "images/icon-plus.svg");
    }

    #[test]
    fn test_detail_rejects_state_from_another_status() {
        let err = upload_detail(&JobState::Init).unwrap_err();
        assert_eq!(err.expected, StatusCode::Upload);
        assert_eq!(err.actual, StatusCode::Init);
    }

    #[test]
    fn test_downloaded_detail_names_server_and_website() {
        let state = JobState::Downloaded {
            source: SubtitleSource {
                name: "OpenSubtitles".to_string(),
                website: "opensubtitles.org".to_string(),
            },
        };
        let text = (descriptor(StatusCode::Downloaded).detail)(&state).unwrap();
        assert!(text.contains("OpenSubtitles"));
        assert!(text.contains("opensubtitles.org"));
    }

    #[test]
    fn test_unknown_descriptor_is_deterministic() {
        let fallback = unknown_descriptor();
        assert_eq!(fallback.icon, IconId::Error);
        assert_eq!((fallback.detail)(&JobState::Init).unwrap(), "Unknown status");
    }
}
