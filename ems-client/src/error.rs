//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the HTTP client wrapper
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// A 2xx response whose body failed to deserialize
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// True when the server reported 404 for the requested resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let err = ClientError::Status {
            status: StatusCode::NOT_FOUND,
            body: "Employee 42 not found".into(),
        };
        assert!(err.is_not_found());

        let err = ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_status_display_carries_code_and_body() {
        let err = ClientError::Status {
            status: StatusCode::BAD_REQUEST,
            body: "First name is required".into(),
        };
        assert_eq!(
            format!("{}", err),
            "HTTP 400 Bad Request: First name is required"
        );
    }
}
