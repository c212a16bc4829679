//! Error handling for log statistics processing.
//!
//! Only file-level failures are errors. Problems with individual lines are
//! reported as [`crate::diagnostics::Diagnostic`] events and never abort a run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read {path} at line {line}: {source}")]
    ReadFailed {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing output file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, StatsError>;
