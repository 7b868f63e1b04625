//! API error types for the care-platform backend client.

use serde::Deserialize;

/// Errors from backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot reach the care platform API at {0}")]
    Connection(String),
    #[error("Request timed out")]
    Timeout,
    #[error("HTTP transport error: {0}")]
    Transport(String),
    #[error("Server returned {status}")]
    Server {
        status: u16,
        /// `responseMessage` from the error body, when the server sent one.
        message: Option<String>,
    },
    #[error("Failed to decode server response: {0}")]
    Decode(String),
    #[error("Auth token unavailable: {0}")]
    Auth(String),
}

impl ApiError {
    /// The user-facing detail for this error, when the server provided one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Error body shape used by the backend: `{ "responseMessage": "..." }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponseBody {
    #[serde(default)]
    response_message: Option<String>,
}

/// Map a non-success response body to [`ApiError::Server`], extracting the
/// server's `responseMessage` when the body parses.
pub(crate) fn server_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorResponseBody>(body)
        .ok()
        .and_then(|b| b.response_message);
    ApiError::Server { status, message }
}

/// Map a reqwest transport failure, distinguishing unreachable hosts and
/// timeouts from everything else.
pub(crate) fn transport_error(base_url: &str, err: reqwest::Error) -> ApiError {
    if err.is_connect() {
        ApiError::Connection(base_url.to_string())
    } else if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_extracts_response_message() {
        let err = server_error(409, r#"{ "responseMessage": "Device already assigned" }"#);
        assert_eq!(err.server_message(), Some("Device already assigned"));
        match err {
            ApiError::Server { status, .. } => assert_eq!(status, 409),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn server_error_tolerates_unparseable_body() {
        let err = server_error(500, "<html>Internal Server Error</html>");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn server_error_tolerates_missing_message_field() {
        let err = server_error(400, r#"{ "code": "BAD_REQUEST" }"#);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn non_server_errors_have_no_server_message() {
        assert_eq!(ApiError::Timeout.server_message(), None);
        assert_eq!(
            ApiError::Connection("http://localhost".into()).server_message(),
            None
        );
    }
}
