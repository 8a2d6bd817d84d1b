//! Error types for toolprep operations.
//!
//! This module defines [`ToolprepError`], the error type for the few
//! operations that can fail outright, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Probing, plan selection and installation never return errors; they
//!   report outcomes (`ok` flag plus detail) and leave escalation to the
//!   orchestrator
//! - Use `ToolprepError` for configuration and filesystem failures
//! - Use `anyhow::Error` (via `ToolprepError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolprep operations.
#[derive(Debug, Error)]
pub enum ToolprepError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A generated artifact could not be written.
    #[error("Failed to write {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for toolprep operations.
pub type Result<T> = std::result::Result<T, ToolprepError>;
