//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Lightweight static source-file inspector
#[derive(Parser, Debug)]
#[command(name = "source-inspector")]
#[command(about = "Classifies a source file and extracts imports, functions and classes as JSON")]
#[command(version)]
pub struct Cli {
    /// Path to file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit single-line JSON instead of the indented form
    #[arg(short, long)]
    pub compact: bool,

    /// Log diagnostics to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "source_inspector=debug"
        } else {
            "warn"
        }
    }
}
