//! Typed errors surfaced by the upload and existence services.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Debug, Error)]
pub enum UploadFileError {
    /// Caller-supplied data failed validation (missing fields, traversal, bad prefix).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("transport error: {0}")]
    Transport(#[from] FetchError),

    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("service {domain}.{service} not found")]
    ServiceNotFound { domain: String, service: String },

    #[error("service {domain}.{service} only supports calls that return a response")]
    ResponseRequired { domain: String, service: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("blocking task failed: {0}")]
    Join(String),
}

impl UploadFileError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        UploadFileError::InvalidInput(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        UploadFileError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for validation failures the caller can fix by changing the payload.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, UploadFileError::InvalidInput(_))
    }
}

impl From<base64::DecodeError> for UploadFileError {
    fn from(err: base64::DecodeError) -> Self {
        UploadFileError::Decoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UploadFileError>;
