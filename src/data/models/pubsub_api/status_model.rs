#![allow(dead_code)]

use serde::Deserialize;

/// Error body returned by Google REST APIs on non-success responses.
///
/// https://cloud.google.com/apis/design/errors#http_mapping
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponseModel {
    pub(crate) error: StatusModel,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusModel {
    /// HTTP status code, repeated in the body.
    pub(crate) code: u16,
    /// Human-readable description, e.g. "Deadline Exceeded".
    pub(crate) message: String,
    /// Canonical status name, e.g. "DEADLINE_EXCEEDED".
    pub(crate) status: Option<String>,
}
