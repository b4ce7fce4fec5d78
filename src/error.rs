use reqwest::StatusCode;
use thiserror::Error;

/// A remote call failed. Callers log it and fall back to a quiet UI state.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Backend returned status {0}")]
    Status(StatusCode),
    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}
