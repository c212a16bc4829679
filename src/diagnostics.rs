//! Per-line warnings and the sink they are reported to.
//!
//! The analyzer never writes to the console itself. Every skipped line is
//! turned into a [`Diagnostic`] and handed to a [`DiagnosticSink`], so callers
//! decide whether warnings are logged, collected, or counted.

use std::fmt;
use tracing::warn;

/// A content line that was dropped, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Mapping line without exactly one `=`
    MalformedMapping { line_number: usize, line: String },

    /// Mapping line whose right-hand side is not an integer
    InvalidVariableId { line_number: usize, line: String },

    /// Value line without any `:`
    MissingChannelSeparator { line_number: usize, line: String },

    /// Value payload without exactly three `;`-separated fields
    WrongFieldCount {
        line_number: usize,
        line: String,
        found: usize,
    },

    /// Value line for a channel with no mapping (yet)
    UnknownChannel {
        line_number: usize,
        line: String,
        channel: String,
    },

    /// Value field is not a finite decimal number
    InvalidValue { line_number: usize, line: String },

    /// Timestamp field does not match `dd.MM.yyyy HH:mm:ss.fff`
    InvalidTimestamp { line_number: usize, line: String },
}

impl Diagnostic {
    /// 1-based line number in the input file
    pub fn line_number(&self) -> usize {
        match self {
            Diagnostic::MalformedMapping { line_number, .. }
            | Diagnostic::InvalidVariableId { line_number, .. }
            | Diagnostic::MissingChannelSeparator { line_number, .. }
            | Diagnostic::WrongFieldCount { line_number, .. }
            | Diagnostic::UnknownChannel { line_number, .. }
            | Diagnostic::InvalidValue { line_number, .. }
            | Diagnostic::InvalidTimestamp { line_number, .. } => *line_number,
        }
    }

    /// The offending line, trimmed
    pub fn line(&self) -> &str {
        match self {
            Diagnostic::MalformedMapping { line, .. }
            | Diagnostic::InvalidVariableId { line, .. }
            | Diagnostic::MissingChannelSeparator { line, .. }
            | Diagnostic::WrongFieldCount { line, .. }
            | Diagnostic::UnknownChannel { line, .. }
            | Diagnostic::InvalidValue { line, .. }
            | Diagnostic::InvalidTimestamp { line, .. } => line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.line_number();
        match self {
            Diagnostic::MalformedMapping { line, .. } => {
                write!(f, "line {n}: malformed variable mapping line: {line}")
            }
            Diagnostic::InvalidVariableId { line, .. } => {
                write!(f, "line {n}: could not parse variable id in line: {line}")
            }
            Diagnostic::MissingChannelSeparator { line, .. } => {
                write!(f, "line {n}: malformed value entry (no ':' found): {line}")
            }
            Diagnostic::WrongFieldCount { line, found, .. } => write!(
                f,
                "line {n}: malformed value entry (expected 3 fields after ':', found {found}): {line}"
            ),
            Diagnostic::UnknownChannel { line, channel, .. } => write!(
                f,
                "line {n}: channel '{channel}' not found in variable mappings, skipping line: {line}"
            ),
            Diagnostic::InvalidValue { line, .. } => {
                write!(f, "line {n}: could not parse value in line: {line}")
            }
            Diagnostic::InvalidTimestamp { line, .. } => {
                write!(f, "line {n}: could not parse timestamp in line: {line}")
            }
        }
    }
}

/// Receiver for per-line warnings
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F> DiagnosticSink for FnSink<F>
where
    F: FnMut(Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        (self.0)(diagnostic)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Logs every diagnostic as a `tracing` warning
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
    }
}

/// Keeps every diagnostic in arrival order
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
