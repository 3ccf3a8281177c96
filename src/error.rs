//! Error types for Blitz
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::deploy::DeployError;
use crate::domain::value_objects::ValidationError;

/// Result type alias for Blitz operations
pub type BlitzResult<T> = Result<T, BlitzError>;

/// Main error type for Blitz operations
#[derive(Error, Debug)]
pub enum BlitzError {
    /// A configuration field failed validation
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// A deploy pipeline step failed or was interrupted
    #[error(transparent)]
    Deploy(#[from] DeployError),

    /// The `.env` overlay exists but could not be read
    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BlitzError {
    /// Captured remote output attached to the failure, if any
    pub fn remote_output(&self) -> Option<&str> {
        match self {
            BlitzError::Deploy(err) => err.output(),
            _ => None,
        }
    }
}
