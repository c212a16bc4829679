//! Sub-parsers for content lines of the variables and values sections.
//!
//! These functions only split and convert fields; resolving channels and
//! reporting problems is the router's job.

use crate::constants::{
    CHANNEL_SEPARATOR, MAPPING_SEPARATOR, VALUE_FIELD_COUNT, VALUE_FIELD_SEPARATOR,
};
use crate::models::{MappingEntry, RawValueEntry};

/// Why a mapping line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingIssue {
    /// Not exactly two `=`-separated parts
    Malformed,
    /// Right-hand side is not a base-10 integer
    InvalidVariableId,
}

/// Why a value line could not be split into its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueIssue {
    MissingChannelSeparator,
    WrongFieldCount(usize),
}

/// Parse `<channel>=<variableId>`
///
/// The line is split on every `=`, so `a=b=1` is malformed rather than
/// mapping `a` to `b=1`.
pub fn parse_mapping_line(line: &str) -> Result<MappingEntry, MappingIssue> {
    let parts: Vec<&str> = line.split(MAPPING_SEPARATOR).collect();
    let [channel, variable_id] = parts.as_slice() else {
        return Err(MappingIssue::Malformed);
    };

    let variable_id = variable_id
        .trim()
        .parse::<i32>()
        .map_err(|_| MappingIssue::InvalidVariableId)?;

    Ok(MappingEntry {
        channel: channel.trim().to_string(),
        variable_id,
    })
}

/// Split `@<channel>:<value>;<status>;<timestamp>` into raw fields
///
/// Only the first `:` separates the channel, since timestamps contain `:`
/// themselves. The channel is trimmed but otherwise kept as written,
/// including any leading `@`.
pub fn split_value_line(line: &str) -> Result<RawValueEntry<'_>, ValueIssue> {
    let (channel, rest) = line
        .split_once(CHANNEL_SEPARATOR)
        .ok_or(ValueIssue::MissingChannelSeparator)?;

    let fields: Vec<&str> = rest.split(VALUE_FIELD_SEPARATOR).collect();
    if fields.len() != VALUE_FIELD_COUNT {
        return Err(ValueIssue::WrongFieldCount(fields.len()));
    }

    Ok(RawValueEntry {
        channel: channel.trim(),
        value: fields[0].trim(),
        status: fields[1].trim(),
        timestamp: fields[2].trim(),
    })
}

/// Parse a measured value with `.` as decimal separator
///
/// Rejects thousands separators, and `NaN`/infinities which would break the
/// min/max ordering.
pub fn parse_value(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}
