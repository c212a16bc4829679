//! Fixed-format timestamp handling.
//!
//! The export format only ever uses `dd.MM.yyyy HH:mm:ss.fff`. chrono's
//! parser is lenient about field widths (`%d` accepts `1` as well as `01`),
//! so the character layout is checked before handing the string to chrono.

use crate::constants::{TIMESTAMP_FORMAT, TIMESTAMP_LENGTH};
use chrono::{Datelike, NaiveDateTime};

/// Earliest calendar year accepted; the export format has no year zero
const MIN_YEAR: i32 = 1;

/// Byte positions of separators in `dd.MM.yyyy HH:mm:ss.fff`
const SEPARATORS: [(usize, u8); 6] = [
    (2, b'.'),
    (5, b'.'),
    (10, b' '),
    (13, b':'),
    (16, b':'),
    (19, b'.'),
];

/// Parse a timestamp in the exact `dd.MM.yyyy HH:mm:ss.fff` layout
///
/// Returns `None` for any deviation in width or separators, for dates or
/// times that do not exist (e.g. `31.02.2024`), and for year `0000`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if !has_fixed_layout(value) {
        return None;
    }

    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .filter(|timestamp| timestamp.year() >= MIN_YEAR)
}

/// Format a timestamp as `dd.MM.yyyy HH:mm:ss.fff`
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

fn has_fixed_layout(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != TIMESTAMP_LENGTH {
        return false;
    }

    bytes.iter().enumerate().all(|(index, byte)| {
        match SEPARATORS.iter().find(|(position, _)| *position == index) {
            Some((_, separator)) => byte == separator,
            None => byte.is_ascii_digit(),
        }
    })
}
