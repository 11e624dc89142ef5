//! Server error types

use axum::http::StatusCode;
use thiserror::Error;

/// Main server error type
///
/// The API surface has exactly two failure modes; everything else
/// (unparseable totals, dates, times inside scoring) is recovered
/// locally with zero defaults and never reaches the caller.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Request body did not deserialize into a receipt
    ///
    /// Carries the underlying parse error text, which becomes the
    /// response body verbatim.
    #[error("{0}")]
    MalformedInput(String),

    /// No receipt stored under the requested identifier
    #[error("Receipt not found")]
    ReceiptNotFound,
}

/// Server result type alias
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ServerError::ReceiptNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::MalformedInput(e.to_string())
    }
}
