//! Error types for the Lichess API client.
//!
//! Three failure classes exist: transport errors ([`Error::Http`]), error
//! responses from the API ([`Error::Api`]), and decode errors for malformed
//! payloads ([`Error::Json`]). All are raised to the immediate caller; the
//! client performs no retries.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Lichess operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Lichess API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connection refused, timeout, DNS failure)
    /// before or while reading a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed JSON in an otherwise successful response.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API returned a response with status >= 400.
    #[error("API error: status={status} {reason}{}", cause.as_deref().map(|c| format!(": {c}")).unwrap_or_default())]
    Api {
        /// HTTP status code
        status: u16,
        /// HTTP reason phrase
        reason: String,
        /// The `error` field of the JSON error body, when present
        cause: Option<String>,
        /// Raw response body for debugging
        body: Value,
    },

    /// Invalid input provided to a method.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the HTTP status code if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this error indicates a client-side API failure
    /// (status in 400..500).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if (400..500).contains(status))
    }

    /// Returns `true` if this error indicates a server-side API failure.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Returns `true` if this is a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Create an API error from a response status and best-effort-parsed body.
    ///
    /// The cause is the `error` field of the JSON body when the body is
    /// parseable JSON carrying one; otherwise the cause is absent.
    pub(crate) fn from_api_response(status: u16, reason: String, body: Value) -> Self {
        let cause = match body.get("error") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        Error::Api {
            status,
            reason,
            cause,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_response_string_cause() {
        let body = serde_json::json!({"error": "Not found"});
        let err = Error::from_api_response(404, "Not Found".into(), body);
        match err {
            Error::Api {
                status,
                reason,
                cause,
                ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
                assert_eq!(cause.as_deref(), Some("Not found"));
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_from_api_response_without_cause() {
        let err = Error::from_api_response(500, "Internal Server Error".into(), Value::Null);
        match err {
            Error::Api { status, cause, .. } => {
                assert_eq!(status, 500);
                assert!(cause.is_none());
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_from_api_response_structured_cause() {
        // Some endpoints nest the failure details under `error`
        let body = serde_json::json!({"error": {"clock.limit": ["Invalid value"]}});
        let err = Error::from_api_response(400, "Bad Request".into(), body);
        match err {
            Error::Api { cause, .. } => {
                assert!(cause.unwrap().contains("clock.limit"));
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_error_classification() {
        let not_found = Error::from_api_response(404, "Not Found".into(), serde_json::json!({}));
        assert!(not_found.is_client_error());
        assert!(not_found.is_not_found());
        assert!(!not_found.is_server_error());

        let server = Error::from_api_response(503, "Service Unavailable".into(), Value::Null);
        assert!(server.is_server_error());
        assert!(!server.is_client_error());

        assert!(Error::InvalidInput("bad".into()).status().is_none());
    }
}
