use reqwest::StatusCode;

use crate::data::models::pubsub_api::status_model::ErrorResponseModel;
use crate::errors::TransportError;

/// Statuses worth retrying within a call's deadline budget.
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

/// Maps a non-success response to a transport error, preferring the service's
/// own error body ("Deadline Exceeded" and friends) over the bare HTTP status
/// line.
pub(crate) async fn status_error(response: reqwest::Response) -> TransportError {
    let status = response.status();
    let message = match response.json::<ErrorResponseModel>().await {
        Ok(body) => body.error.message,
        Err(_) => status.canonical_reason().unwrap_or("Unknown").to_owned(),
    };
    TransportError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_statuses_are_retryable() {
        for code in [429u16, 500, 502, 503, 504] {
            assert!(is_retryable_status(StatusCode::from_u16(code).unwrap()));
        }
    }

    #[test]
    fn client_errors_are_not_retryable() {
        for code in [400u16, 401, 403, 404, 409] {
            assert!(!is_retryable_status(StatusCode::from_u16(code).unwrap()));
        }
    }
}
