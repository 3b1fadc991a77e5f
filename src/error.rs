// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
    #[error("invalid REQUEST_TIMEOUT_SECS value '{0}'")]
    InvalidTimeout(String),
}

/// Failure of a single call to the remote completion service.
///
/// Only the message text reaches the client, so the upstream error taxonomy
/// is kept coarse.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to completion service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service returned {status}: {message}")]
    Service { status: u16, message: String },
    #[error("malformed completion response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Parse(serde_json::Error),
    #[error("frame is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// The peer can no longer receive frames.
#[derive(Debug, Error)]
#[error("connection closed: {0}")]
pub struct SocketClosed(pub String);
