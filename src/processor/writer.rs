//! Output serialization for computed statistics.
//!
//! The output is written in one go after the whole input has been read, one
//! `;`-separated line per variable in ascending id order, with no header.

use crate::error::{Result, StatsError};
use crate::models::VariableStats;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output path next to the input: extension replaced by `suffix`
///
/// `data/A1.TXT` with `_stats.txt` becomes `data/A1_stats.txt`. An input with
/// no directory component yields a path in the current directory.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{}{}", stem, suffix);

    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

/// Write records to `path`, replacing any existing file
///
/// Records are written in the order given; callers pass them sorted.
pub fn write_stats(path: &Path, records: &[VariableStats]) -> Result<()> {
    let to_write_error = |source: std::io::Error| StatsError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writeln!(writer, "{}", record.to_output_line()).map_err(to_write_error)?;
    }

    // Flush explicitly so errors surface here instead of being lost on drop
    writer.flush().map_err(to_write_error)?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
