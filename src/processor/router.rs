//! Section router and line classifier.
//!
//! Walks the input one line at a time, tracks the most recent section header
//! and hands content lines to the sub-parser for that section. Every rejected
//! line becomes exactly one diagnostic; nothing here aborts on bad content.

use super::aggregator::StatsAggregator;
use super::entries::{MappingIssue, ValueIssue, parse_mapping_line, parse_value, split_value_line};
use crate::constants::SECTION_DELIMITER;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{Result, StatsError};
use crate::models::{ParseStats, Section, VariableStats};
use crate::timestamp::parse_timestamp;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, trace};

/// Records and counters produced by a completed analysis
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// One record per variable that received a value, ascending by id
    pub records: Vec<VariableStats>,
    pub stats: ParseStats,
}

/// Single-pass analyzer for one input file
///
/// State is scoped to the instance; create a fresh analyzer per file.
#[derive(Debug)]
pub struct LogAnalyzer<S: DiagnosticSink> {
    section: Section,
    aggregator: StatsAggregator,
    stats: ParseStats,
    sink: S,
}

impl<S: DiagnosticSink> LogAnalyzer<S> {
    pub fn new(sink: S) -> Self {
        Self {
            section: Section::None,
            aggregator: StatsAggregator::new(),
            stats: ParseStats::new(),
            sink,
        }
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn aggregator(&self) -> &StatsAggregator {
        &self.aggregator
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Read every line from `reader` and process it
    ///
    /// Invalid UTF-8 is replaced rather than treated as a read failure, since
    /// exports from older systems are not always UTF-8. Any I/O error stops
    /// the analysis.
    pub fn process_reader<R: BufRead>(&mut self, mut reader: R, source: &Path) -> Result<()> {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|source_err| StatsError::ReadFailed {
                    path: source.to_path_buf(),
                    line: self.stats.lines_read + 1,
                    source: source_err,
                })?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            self.process_line(&line);
        }

        debug!(
            "Read {} lines from {}: {} mappings, {} values, {} skipped",
            self.stats.lines_read,
            source.display(),
            self.stats.mappings_recorded,
            self.stats.values_applied,
            self.stats.lines_skipped
        );

        Ok(())
    }

    /// Classify and process one raw input line
    pub fn process_line(&mut self, raw: &str) {
        self.stats.lines_read += 1;
        let line_number = self.stats.lines_read;

        let line = raw.trim();
        if line.is_empty() {
            self.stats.blank_lines += 1;
            return;
        }

        if is_section_header(line) {
            self.stats.section_headers += 1;
            self.section = Section::from_header(line);
            trace!("Line {}: entering section {}", line_number, line);
            return;
        }

        match self.section {
            Section::Variables => self.process_mapping(line_number, line),
            Section::Values => self.process_value(line_number, line),
            Section::None | Section::Other(_) => self.stats.lines_ignored += 1,
        }
    }

    /// Hand back the sorted records, counters and the sink
    pub fn finish(self) -> (AnalysisOutcome, S) {
        let outcome = AnalysisOutcome {
            records: self.aggregator.into_sorted_records(),
            stats: self.stats,
        };
        (outcome, self.sink)
    }

    fn process_mapping(&mut self, line_number: usize, line: &str) {
        match parse_mapping_line(line) {
            Ok(entry) => {
                self.aggregator.record_mapping(entry);
                self.stats.mappings_recorded += 1;
            }
            Err(MappingIssue::Malformed) => self.skip(Diagnostic::MalformedMapping {
                line_number,
                line: line.to_string(),
            }),
            Err(MappingIssue::InvalidVariableId) => self.skip(Diagnostic::InvalidVariableId {
                line_number,
                line: line.to_string(),
            }),
        }
    }

    fn process_value(&mut self, line_number: usize, line: &str) {
        let raw = match split_value_line(line) {
            Ok(raw) => raw,
            Err(ValueIssue::MissingChannelSeparator) => {
                return self.skip(Diagnostic::MissingChannelSeparator {
                    line_number,
                    line: line.to_string(),
                });
            }
            Err(ValueIssue::WrongFieldCount(found)) => {
                return self.skip(Diagnostic::WrongFieldCount {
                    line_number,
                    line: line.to_string(),
                    found,
                });
            }
        };

        let Some(variable_id) = self.aggregator.resolve(raw.channel) else {
            return self.skip(Diagnostic::UnknownChannel {
                line_number,
                line: line.to_string(),
                channel: raw.channel.to_string(),
            });
        };

        let Some(value) = parse_value(raw.value) else {
            return self.skip(Diagnostic::InvalidValue {
                line_number,
                line: line.to_string(),
            });
        };

        let Some(timestamp) = parse_timestamp(raw.timestamp) else {
            return self.skip(Diagnostic::InvalidTimestamp {
                line_number,
                line: line.to_string(),
            });
        };

        self.aggregator.apply_value(variable_id, value, timestamp);
        self.stats.values_applied += 1;
    }

    fn skip(&mut self, diagnostic: Diagnostic) {
        self.stats.lines_skipped += 1;
        self.sink.report(diagnostic);
    }
}

/// A header is any non-empty trimmed line bounded by `-` on both ends
fn is_section_header(line: &str) -> bool {
    !line.is_empty() && line.starts_with(SECTION_DELIMITER) && line.ends_with(SECTION_DELIMITER)
}
