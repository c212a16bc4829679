use anyhow::Context;
use channel_stats::LogProcessor;
use channel_stats::cli::{self, Args};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    init_logging(&args);

    // No input file is a usage request, not a failure
    let Some(input_file) = args.input_file.clone() else {
        cli::print_usage();
        process::exit(0);
    };

    match run(&args, input_file) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args, input_file: std::path::PathBuf) -> anyhow::Result<()> {
    let config = args.to_config();
    let show_summary = config.show_summary;

    let processor = LogProcessor::new(&input_file, config)?;
    let summary = processor
        .process()
        .with_context(|| format!("Failed to process {}", input_file.display()))?;

    if show_summary {
        cli::report_summary(&summary);
    }

    Ok(())
}

/// Initialize logging; `RUST_LOG` takes precedence over command-line verbosity
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
