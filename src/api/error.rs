//! Gateway Error Types

use thiserror::Error;

/// Errors surfaced by a [`PortalApi`](super::PortalApi) call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// The request could not be built (bad URL, unserializable body)
    #[error("Request build error: {0}")]
    Build(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else if err.is_builder() {
            ApiError::Build(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Result type for gateway calls
pub type ApiResult<T> = Result<T, ApiError>;
