//! Error types for Ollama operations

use thiserror::Error;

/// Broad class of a failure, used to pick how it is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Server not running or not reachable
    Connectivity,
    /// Server answered with a non-success status
    Request,
    /// Server answered with an unexpected payload
    Parse,
    /// Bad input from the user
    Input,
}

/// Errors that can occur while talking to the Ollama server
#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("Cannot connect to Ollama at {url} - make sure it's running ({reason})")]
    Connection { url: String, reason: String },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Ollama returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Unexpected response from Ollama: {0}")]
    Parse(String),

    #[error("Invalid model name: {0}")]
    InvalidModelName(String),

    #[error("Pull failed: {0}")]
    PullFailed(String),

    #[error("Download stalled: no updates for {0} seconds")]
    Stalled(u64),

    #[error("CLI download failed: {0}")]
    Cli(String),
}

impl OllamaError {
    /// Map a transport error from reqwest
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OllamaError::Timeout(err.to_string())
        } else if err.is_decode() {
            OllamaError::Parse(err.to_string())
        } else {
            OllamaError::Connection {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            OllamaError::Connection { .. }
            | OllamaError::Timeout(_)
            | OllamaError::Stalled(_)
            | OllamaError::Cli(_) => FailureKind::Connectivity,
            OllamaError::Status { .. }
            | OllamaError::ModelNotFound(_)
            | OllamaError::PullFailed(_) => FailureKind::Request,
            OllamaError::Parse(_) => FailureKind::Parse,
            OllamaError::InvalidModelName(_) => FailureKind::Input,
        }
    }

    /// True when the server could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, OllamaError::Connection { .. })
    }
}

impl From<serde_json::Error> for OllamaError {
    fn from(err: serde_json::Error) -> Self {
        OllamaError::Parse(err.to_string())
    }
}
