//! Configuration for processing a log export.
//!
//! The file format itself is fixed (see [`crate::constants`]); only where the
//! results go and how much is reported can be configured.

use crate::constants::DEFAULT_OUTPUT_SUFFIX;
use crate::error::{Result, StatsError};
use std::path::PathBuf;

/// Settings for a single processing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Explicit output file; derived from the input path when `None`
    pub output_path: Option<PathBuf>,

    /// Suffix replacing the input extension when deriving the output path
    pub output_suffix: String,

    /// Print a summary of line counts after processing
    pub show_summary: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            show_summary: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }

    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }

    /// Check settings before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.output_path.is_none() && self.output_suffix.trim().is_empty() {
            return Err(StatsError::Configuration {
                message: "output suffix must not be empty".to_string(),
            });
        }

        if self.output_suffix.contains(['/', '\\']) {
            return Err(StatsError::Configuration {
                message: format!(
                    "output suffix '{}' must not contain path separators",
                    self.output_suffix
                ),
            });
        }

        if let Some(path) = &self.output_path {
            if path.as_os_str().is_empty() {
                return Err(StatsError::Configuration {
                    message: "output path must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
