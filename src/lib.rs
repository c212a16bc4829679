//! Channel Stats Library
//!
//! Reads log exports from an industrial monitoring system and computes, for
//! every logged variable, the minimum and maximum value together with the
//! timestamps at which they occurred.
//!
//! An export has a `-VARIABLES-` section mapping channel tokens to numeric
//! variable ids and a `-VALUES-` section of timestamped readings:
//!
//! ```text
//! -VARIABLES-
//! 1=100
//! -VALUES-
//! @1:5.5;0;01.01.2024 10:00:00.000
//! ```
//!
//! The input is read in a single pass. Lines that cannot be parsed are
//! reported through a [`diagnostics::DiagnosticSink`] and skipped; only I/O
//! failures abort processing.
//!
//! ```no_run
//! use channel_stats::{AnalyzerConfig, LogProcessor};
//!
//! # fn example() -> channel_stats::Result<()> {
//! let processor = LogProcessor::new("A1.TXT", AnalyzerConfig::default())?;
//! let summary = processor.process()?;
//! println!("{} variables written to {}", summary.variables_written, summary.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod processor;
pub mod timestamp;

// Re-export commonly used types
pub use config::AnalyzerConfig;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::{Result, StatsError};
pub use models::{ParseStats, ProcessingSummary, Section, VariableStats};
pub use processor::{LogAnalyzer, LogProcessor};
