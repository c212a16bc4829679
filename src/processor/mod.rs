//! Processing engine for monitoring log exports.
//!
//! Orchestrates one file end to end: existence check, single-pass analysis
//! of the input, and writing the sorted statistics once the input is fully
//! consumed. A read failure leaves no output file behind.

pub mod aggregator;
pub mod entries;
pub mod router;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use aggregator::StatsAggregator;
pub use router::{AnalysisOutcome, LogAnalyzer};
pub use writer::{derive_output_path, write_stats};

use crate::config::AnalyzerConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{Result, StatsError};
use crate::models::ProcessingSummary;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Processes a single input file into its statistics file
#[derive(Debug)]
pub struct LogProcessor {
    input_path: PathBuf,
    config: AnalyzerConfig,
}

impl LogProcessor {
    /// Create a processor for `input_path`
    ///
    /// Fails if the configuration is invalid or the input file does not exist.
    pub fn new(input_path: impl Into<PathBuf>, config: AnalyzerConfig) -> Result<Self> {
        let input_path = input_path.into();
        config.validate()?;

        if !input_path.is_file() {
            return Err(StatsError::InputNotFound { path: input_path });
        }

        Ok(Self { input_path, config })
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Where the statistics will be written
    pub fn output_path(&self) -> PathBuf {
        match &self.config.output_path {
            Some(path) => path.clone(),
            None => derive_output_path(&self.input_path, &self.config.output_suffix),
        }
    }

    /// Process the file, logging per-line warnings through `tracing`
    pub fn process(&self) -> Result<ProcessingSummary> {
        self.process_with_sink(TracingSink).map(|(summary, _)| summary)
    }

    /// Process the file, reporting per-line warnings to `sink`
    ///
    /// The sink is handed back so callers can inspect what it collected.
    pub fn process_with_sink<S: DiagnosticSink>(
        &self,
        sink: S,
    ) -> Result<(ProcessingSummary, S)> {
        let file = File::open(&self.input_path)?;
        self.process_reader(BufReader::new(file), sink)
    }

    /// Analyze `reader` as the content of the input file, then write the output
    ///
    /// Nothing is written unless the whole reader was consumed without error.
    pub fn process_reader<R: BufRead, S: DiagnosticSink>(
        &self,
        reader: R,
        sink: S,
    ) -> Result<(ProcessingSummary, S)> {
        let start_time = Instant::now();
        info!("Processing log export: {}", self.input_path.display());

        let (outcome, sink) = self.analyze_reader(reader, sink)?;

        let output_path = self.output_path();
        write_stats(&output_path, &outcome.records)?;

        info!(
            "Wrote statistics for {} variables to {}",
            outcome.records.len(),
            output_path.display()
        );

        let summary = ProcessingSummary {
            input_path: self.input_path.clone(),
            output_path,
            variables_written: outcome.records.len(),
            stats: outcome.stats,
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        Ok((summary, sink))
    }

    /// Read and analyze the whole input without writing anything
    pub fn analyze<S: DiagnosticSink>(&self, sink: S) -> Result<(AnalysisOutcome, S)> {
        let file = File::open(&self.input_path)?;
        self.analyze_reader(BufReader::new(file), sink)
    }

    fn analyze_reader<R: BufRead, S: DiagnosticSink>(
        &self,
        reader: R,
        sink: S,
    ) -> Result<(AnalysisOutcome, S)> {
        let mut analyzer = LogAnalyzer::new(sink);
        analyzer.process_reader(reader, &self.input_path)?;

        debug!(
            "Analysis complete: {} channels mapped, {} variables with values",
            analyzer.aggregator().channel_count(),
            analyzer.aggregator().variable_count()
        );

        Ok(analyzer.finish())
    }
}
