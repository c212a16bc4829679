//! Core data structures for log statistics processing.
//!
//! Defines the router's section state, parsed line payloads, the per-variable
//! min/max record, and the statistics reported after a run.

use crate::constants::{OUTPUT_FIELD_SEPARATOR, VALUES_SECTION, VARIABLES_SECTION};
use crate::timestamp::format_timestamp;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Section of the export file that governs how content lines are read
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Section {
    /// No header seen yet
    #[default]
    None,
    /// `-VARIABLES-`: channel to variable id mappings
    Variables,
    /// `-VALUES-`: timestamped value entries
    Values,
    /// Any other header, kept verbatim; its content is ignored
    Other(String),
}

impl Section {
    /// Classify a trimmed header line by exact match
    pub fn from_header(header: &str) -> Self {
        match header {
            VARIABLES_SECTION => Section::Variables,
            VALUES_SECTION => Section::Values,
            other => Section::Other(other.to_string()),
        }
    }

    /// Whether content lines in this section are parsed at all
    pub fn is_parsed(&self) -> bool {
        matches!(self, Section::Variables | Section::Values)
    }
}

/// A `channel=variableId` line from the variables section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub channel: String,
    pub variable_id: i32,
}

/// A value line split into its fields, before any field is interpreted
///
/// `status` is carried for completeness; nothing downstream reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValueEntry<'a> {
    pub channel: &'a str,
    pub value: &'a str,
    pub status: &'a str,
    pub timestamp: &'a str,
}

/// Running min/max summary for one variable
///
/// A record only exists once a first observation has been seen, so both
/// bounds are always populated and `min_value <= max_value` holds.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStats {
    variable_id: i32,
    min_value: f64,
    min_timestamp: NaiveDateTime,
    max_value: f64,
    max_timestamp: NaiveDateTime,
}

impl VariableStats {
    /// Create a record from the first observation of a variable
    pub fn new(variable_id: i32, value: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            variable_id,
            min_value: value,
            min_timestamp: timestamp,
            max_value: value,
            max_timestamp: timestamp,
        }
    }

    /// Fold one observation into the record
    ///
    /// Bounds move only on strict `<` / `>`, so on ties the timestamp of the
    /// earlier observation is kept. Returns true if either bound changed.
    pub fn update(&mut self, value: f64, timestamp: NaiveDateTime) -> bool {
        let mut changed = false;

        if value < self.min_value {
            self.min_value = value;
            self.min_timestamp = timestamp;
            changed = true;
        }
        if value > self.max_value {
            self.max_value = value;
            self.max_timestamp = timestamp;
            changed = true;
        }

        changed
    }

    pub fn variable_id(&self) -> i32 {
        self.variable_id
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn min_timestamp(&self) -> NaiveDateTime {
        self.min_timestamp
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn max_timestamp(&self) -> NaiveDateTime {
        self.max_timestamp
    }

    /// Render as `variableId;minValue;minTimestamp;maxValue;maxTimestamp`
    pub fn to_output_line(&self) -> String {
        let sep = OUTPUT_FIELD_SEPARATOR;
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.variable_id,
            self.min_value,
            format_timestamp(&self.min_timestamp),
            self.max_value,
            format_timestamp(&self.max_timestamp),
        )
    }
}

/// Line-level parsing statistics for one input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Every line read, blank ones included
    pub lines_read: usize,

    /// Blank or whitespace-only lines
    pub blank_lines: usize,

    /// Section header lines
    pub section_headers: usize,

    /// Mapping lines recorded in the channel table
    pub mappings_recorded: usize,

    /// Value lines folded into a statistics record
    pub values_applied: usize,

    /// Content lines outside any parsed section
    pub lines_ignored: usize,

    /// Content lines dropped with a warning
    pub lines_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Content lines that reached a sub-parser
    pub fn parsed_lines(&self) -> usize {
        self.mappings_recorded + self.values_applied + self.lines_skipped
    }

    /// Percentage of parsed content lines that were accepted
    pub fn success_rate(&self) -> f64 {
        let attempted = self.parsed_lines();
        if attempted == 0 {
            100.0
        } else {
            ((attempted - self.lines_skipped) as f64 / attempted as f64) * 100.0
        }
    }
}

/// Result of processing one input file end to end
#[derive(Debug, Clone)]
pub struct ProcessingSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub variables_written: usize,
    pub stats: ParseStats,
    pub processing_time_ms: u128,
}
