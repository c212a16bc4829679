//! Command-line interface components.

use crate::config::AnalyzerConfig;
use crate::models::ProcessingSummary;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "channel_stats")]
#[command(about = "Compute per-variable min/max statistics from monitoring log exports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the exported log file
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    /// Write statistics here instead of <input stem>_stats.txt next to the input
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors; no warnings or summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the processing configuration from command-line flags
    pub fn to_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::default()
            .with_output_path(self.output.clone())
            .with_summary(!self.quiet)
    }

    /// Default log filter directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Usage text printed when no input file is given
pub fn print_usage() {
    println!("Please provide the path to the input file.");
    println!();
    println!("USAGE:");
    println!("    channel_stats <INPUT_FILE> [OPTIONS]");
    println!();
    println!("EXAMPLE:");
    println!("    channel_stats A1.TXT");
    println!();
    println!("The input file can be given relative to the current directory or as a full path.");
    println!("Statistics are written to <INPUT_STEM>_stats.txt next to the input file.");
    println!();
    println!("For all options, use:");
    println!("    channel_stats --help");
}

/// Print the outcome of a successful run
pub fn report_summary(summary: &ProcessingSummary) {
    println!(
        "{} {}",
        "Successfully processed file. Output written to:".bright_green(),
        summary.output_path.display()
    );

    let stats = &summary.stats;
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Lines read:".bright_cyan(),
        stats.lines_read.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Mappings recorded:".bright_cyan(),
        stats.mappings_recorded.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Values applied:".bright_cyan(),
        stats.values_applied.to_string().bright_white()
    );
    if stats.lines_skipped > 0 {
        println!(
            "  {} {} ({:.1}% accepted)",
            "Lines skipped:".bright_red(),
            stats.lines_skipped.to_string().bright_red().bold(),
            stats.success_rate()
        );
    }
    println!(
        "  {} {}",
        "Variables written:".bright_cyan(),
        summary.variables_written.to_string().bright_white().bold()
    );
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        summary.processing_time_ms.to_string().bright_white()
    );
}
