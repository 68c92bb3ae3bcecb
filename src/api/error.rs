//! Error types for blog API calls.

use thiserror::Error;

/// Errors that can occur while talking to the blog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not complete (DNS, connect, reset, ...)
    #[error("Request to '{path}' failed: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Http { status: u16, detail: Option<String> },

    /// A success response carried a body we could not decode
    #[error("Unexpected response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided `detail` message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when the server rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Get error type string for log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::Network { .. } => "network_failure",
            ApiError::Http { .. } => "http_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}

/// Extract the `detail` string from an error response body.
///
/// Returns `None` for non-JSON bodies and for `detail` values that are not
/// plain strings (validation errors report a list there).
pub(crate) fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(|detail| detail.as_str())
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
