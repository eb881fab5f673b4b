//! Zoom interaction error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("Required element #{0} not found in document")]
    MissingElement(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with HTTP {0}")]
    HttpStatus(u16),

    #[error("Response body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Successful response is missing field `{0}`")]
    IncompleteResponse(&'static str),
}
