//! Error types shared by the indexing and search pipeline.

use axum::http::StatusCode;
use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the indexer, ingestion adapter and search service.
#[derive(Error, Debug)]
pub enum Error {
    /// Inbound payload is not valid JSON or does not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The backing index store could not be reached.
    #[error("Index store unavailable: {0}")]
    StoreUnavailable(String),

    /// A queue delivery carried a routing key with no matching entry point.
    #[error("Unknown routing key: {0}")]
    UnknownRoute(String),

    #[error("Invalid pagination: page_num={page_num}, page_size={page_size} (both must be >= 1)")]
    InvalidPagination { page_num: i64, page_size: i64 },

    /// The downstream notification channel has been dropped.
    #[error("Notification channel closed")]
    SinkClosed,
}

impl Error {
    /// HTTP status used when this error is returned from an endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Parse(_) | Error::UnknownRoute(_) | Error::InvalidPagination { .. } => {
                StatusCode::BAD_REQUEST
            }
            Error::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::SinkClosed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Malformed inbound message.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The payload as a whole failed to deserialize.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// One element of a seed batch failed to deserialize.
    #[error("seed element {index} is malformed: {source}")]
    SeedElement {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
