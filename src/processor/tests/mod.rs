//! Integration tests for the processor module
//!
//! Runs complete export files through `LogProcessor` and checks the
//! statistics file and the reported diagnostics.

pub mod basic_processing;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temporary directory
pub fn write_export(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}
