//! Typed Status Model
//!
//! The closed set of workflow phases and the per-status job state. Auxiliary
//! data (upload filename, search languages, download source, error message) is
//! carried by the matching [`JobState`] variant, so a `Download`-state payload
//! is guaranteed by its type to have a source and an `Error`-state payload is
//! guaranteed to have a message.

use std::fmt;

use serde::Deserialize;

/// Phase of the external subtitle-sync workflow, as tagged on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Init,
    Info,
    Upload,
    Search,
    Download,
    Downloaded,
    NotFound,
    Unchanged,
    Uploaded,
    Share,
    Error,
}

impl StatusCode {
    /// All eleven codes, in workflow order.
    pub const ALL: [StatusCode; 11] = [
        StatusCode::Init,
        StatusCode::Info,
        StatusCode::Upload,
        StatusCode::Search,
        StatusCode::Download,
        StatusCode::Downloaded,
        StatusCode::NotFound,
        StatusCode::Unchanged,
        StatusCode::Uploaded,
        StatusCode::Share,
        StatusCode::Error,
    ];

    /// The literal wire code (also used as the row's CSS-style class suffix).
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Init => "init",
            StatusCode::Info => "info",
            StatusCode::Upload => "upload",
            StatusCode::Search => "search",
            StatusCode::Download => "download",
            StatusCode::Downloaded => "downloaded",
            StatusCode::NotFound => "notfound",
            StatusCode::Unchanged => "unchanged",
            StatusCode::Uploaded => "uploaded",
            StatusCode::Share => "share",
            StatusCode::Error => "error",
        }
    }

    /// Parse a wire code. Returns `None` for anything outside the closed set.
    pub fn from_code(code: &str) -> Option<StatusCode> {
        StatusCode::ALL.iter().copied().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a subtitle was (or is being) downloaded from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubtitleSource {
    pub name: String,
    pub website: String,
}

/// Current state of one job, with the auxiliary data its phase requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// Search is starting up.
    Init,
    /// Loading video information.
    Info,
    /// Uploading a local subtitle file.
    Upload { filename: String },
    /// Querying subtitle servers for the given languages (e.g. "en, pt").
    Search { languages: String },
    /// Downloading a subtitle from a server.
    Download { source: SubtitleSource },
    /// Download finished.
    Downloaded { source: SubtitleSource },
    /// No subtitle was found.
    NotFound,
    /// A subtitle in the preferred language is already present.
    Unchanged,
    /// Local subtitles were shared successfully.
    Uploaded,
    /// Sharing local subtitles with the server.
    Share,
    /// The workflow failed.
    Error { message: String },
}

impl JobState {
    /// The status code this state belongs to.
    pub fn code(&self) -> StatusCode {
        match self {
            JobState::Init => StatusCode::Init,
            JobState::Info => StatusCode::Info,
            JobState::Upload { .. } => StatusCode::Upload,
            JobState::Search { .. } => StatusCode::Search,
            JobState::Download { .. } => StatusCode::Download,
            JobState::Downloaded { .. } => StatusCode::Downloaded,
            JobState::NotFound => StatusCode::NotFound,
            JobState::Unchanged => StatusCode::Unchanged,
            JobState::Uploaded => StatusCode::Uploaded,
            JobState::Share => StatusCode::Share,
            JobState::Error { .. } => StatusCode::Error,
        }
    }
}

/// One job snapshot as handed over by the external workflow driver.
///
/// Read-only from the renderer's point of view; rendering never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPayload {
    /// Forward-slash separated path of the video file the job belongs to.
    pub path: String,
    /// Current workflow state, including its auxiliary data.
    pub state: JobState,
}

impl StatusPayload {
    pub fn code(&self) -> StatusCode {
        self.state.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_roundtrip_through_from_code() {
        for code in StatusCode::ALL {
            assert_eq!(StatusCode::from_code(code.as_str()), Some(code));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(StatusCode::from_code("retrying"), None);
        assert_eq!(StatusCode::from_code(""), None);
        assert_eq!(StatusCode::from_code("Init"), None); // codes are lowercase
    }

    #[test]
    fn test_all_is_the_closed_set_of_eleven() {
        assert_eq!(StatusCode::ALL.len(), 11);
        let mut codes: Vec<&str> = StatusCode::ALL.iter().map(|c| c.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 11, "wire codes must be unique");
    }

    #[test]
    fn test_job_state_code_mapping() {
        assert_eq!(JobState::Init.code(), StatusCode::Init);
        assert_eq!(
            JobState::Upload {
                filename: "movie.srt".to_string()
            }
            .code(),
            StatusCode::Upload
        );
        assert_eq!(
            JobState::Download {
                source: SubtitleSource {
                    name: "OpenSubtitles".to_string(),
                    website: "opensubtitles.org".to_string(),
                }
            }
            .code(),
            StatusCode::Download
        );
        assert_eq!(
            JobState::Error {
                message: "timeout".to_string()
            }
            .code(),
            StatusCode::Error
        );
    }

    #[test]
    fn test_payload_is_cloneable_snapshot() {
        let payload = StatusPayload {
            path: "a/b/c.srt".to_string(),
            state: JobState::NotFound,
        };
        let cloned = payload.clone();
        assert_eq!(payload, cloned);
    }
}
