//! Driver JSON Boundary
//!
//! The external workflow driver delivers job snapshots as loosely-shaped JSON:
//! a `status` tag plus whichever auxiliary field that status uses. This module
//! deserializes that shape and converts it into the typed [`StatusPayload`],
//! rejecting unknown status codes and missing auxiliary fields with explicit
//! errors instead of letting an undefined-field failure surface mid-render.

use serde::Deserialize;
use thiserror::Error;

use super::status::{JobState, StatusCode, StatusPayload, SubtitleSource};

/// A job snapshot exactly as the driver sends it.
///
/// Only the auxiliary field matching `status` is expected to be present; the
/// rest default to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePayload {
    pub status: String,
    pub path: String,
    #[serde(default)]
    pub upload: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub download: Option<WireDownload>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireDownload {
    pub source: SubtitleSource,
}

/// Contract violations by the external driver.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("unknown status code `{0}`")]
    UnknownStatus(String),
    #[error("status `{status}` payload is missing its `{field}` field")]
    MissingField {
        status: StatusCode,
        field: &'static str,
    },
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl TryFrom<WirePayload> for StatusPayload {
    type Error = PayloadError;

    fn try_from(wire: WirePayload) -> Result<Self, PayloadError> {
        let code = StatusCode::from_code(&wire.status)
            .ok_or_else(|| PayloadError::UnknownStatus(wire.status.clone()))?;

        let missing = |field: &'static str| PayloadError::MissingField {
            status: code,
            field,
        };

        let state = match code {
            StatusCode::Init => JobState::Init,
            StatusCode::Info => JobState::Info,
            StatusCode::Upload => JobState::Upload {
                filename: wire.upload.ok_or_else(|| missing("upload"))?,
            },
            StatusCode::Search => JobState::Search {
                languages: wire.search.ok_or_else(|| missing("search"))?,
            },
            StatusCode::Download => JobState::Download {
                source: wire.download.ok_or_else(|| missing("download"))?.source,
            },
            StatusCode::Downloaded => JobState::Downloaded {
                source: wire.download.ok_or_else(|| missing("download"))?.source,
            },
            StatusCode::NotFound => JobState::NotFound,
            StatusCode::Unchanged => JobState::Unchanged,
            StatusCode::Uploaded => JobState::Uploaded,
            StatusCode::Share => JobState::Share,
            StatusCode::Error => JobState::Error {
                message: wire.error.ok_or_else(|| missing("error"))?,
            },
        };

        Ok(StatusPayload {
            path: wire.path,
            state,
        })
    }
}

impl StatusPayload {
    /// Parse one driver snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<StatusPayload, PayloadError> {
        let wire: WirePayload = serde_json::from_str(json)?;
        wire.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_without_auxiliary_data_convert() {
        for code in ["init", "info", "notfound", "unchanged", "uploaded", "share"] {
            let json = format!(r#"{{"status": "{code}", "path": "a/b/c.srt"}}"#);
            let payload = StatusPayload::from_json(&json).unwrap();
            assert_eq!(payload.code().as_str(), code);
            assert_eq!(payload.path, "a/b/c.srt");
        }
    }

    #[test]
    fn test_download_payload_carries_its_source() {
        let json = r#"{
            "status": "download",
            "path": "movies/movie.mkv",
            "download": {"source": {"name": "OpenSubtitles", "website": "opensubtitles.org"}}
        }"#;
        let payload = StatusPayload::from_json(json).unwrap();
        match payload.state {
            JobState::Download { source } => {
                assert_eq!(source.name, "OpenSubtitles");
                assert_eq!(source.website, "opensubtitles.org");
            }
            other => panic!("expected download state, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = StatusPayload::from_json(r#"{"status": "retrying", "path": "x"}"#).unwrap_err();
        assert!(matches!(err, PayloadError::UnknownStatus(code) if code == "retrying"));
    }

    #[test]
    fn test_missing_auxiliary_field_is_rejected() {
        let err = StatusPayload::from_json(r#"{"status": "error", "path": "x"}"#).unwrap_err();
        match err {
            PayloadError::MissingField { status, field } => {
                assert_eq!(status, StatusCode::Error);
                assert_eq!(field, "error");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }

        let err = StatusPayload::from_json(r#"{"status": "downloaded", "path": "x"}"#).unwrap_err();
        assert!(matches!(
            err,
            PayloadError::MissingField {
                status: StatusCode::Downloaded,
                field: "download"
            }
        ));
    }

    #[test]
    fn test_irrelevant_auxiliary_fields_are_ignored() {
        // The driver may leave stale fields from a previous phase; only the
        // field belonging to the current status matters.
        let json = r#"{
            "status": "search",
            "path": "a/b/c.srt",
            "search": "en, pt",
            "upload": "stale.srt"
        }"#;
        let payload = StatusPayload::from_json(json).unwrap();
        assert_eq!(
            payload.state,
            JobState::Search {
                languages: "en, pt".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let err = StatusPayload::from_json("{not json").unwrap_err();
        assert!(matches!(err, PayloadError::Json(_)));
    }
}
