//! # Error Types
//!
//! This module defines error types used throughout the tirilla pipeline.
//!
//! Every variant is terminal for the workflow that raised it: the pipeline
//! never retries a stage, it reports the failure and exits non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tirilla operations
#[derive(Debug, Error)]
pub enum TirillaError {
    /// The receipt document could not be read (missing file, bad permissions)
    #[error("Cannot read receipt {path}: {source}")]
    SourceUnavailable {
        /// Path as given on the command line, or `<stdin>`
        path: String,
        #[source]
        source: io::Error,
    },

    /// The per-mode configuration file does not exist
    #[error("Printer configuration not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// The configuration file exists but is not a valid configuration object
    #[error("Invalid printer configuration {}: {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    /// The render transform rejected the document or configuration
    #[error("Render failed: {0}")]
    RenderFailed(String),

    /// File or stdout delivery failed
    #[error("Write failed: {0}")]
    WriteFailed(#[source] io::Error),

    /// Socket delivery failed (refused, timeout, reset mid-send)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type for tirilla operations
pub type TirillaResult<T> = Result<T, TirillaError>;
