//! source-inspector CLI entry point
//!
//! Prints exactly one JSON document to stdout and exits 0 once arguments
//! parse, whether the analysis succeeded or produced an error record.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use source_inspector::{analyze_file, AnalysisOutcome, Cli, InspectError};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    let outcome = analyze_file(&cli.file);
    println!("{}", render(&outcome, cli.compact));

    ExitCode::SUCCESS
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn render(outcome: &AnalysisOutcome, compact: bool) -> String {
    let json = if compact {
        outcome.to_json_compact()
    } else {
        outcome.to_json_pretty()
    };

    match json {
        Ok(s) => s,
        // stdout always carries one JSON object
        Err(e) => {
            let fallback = AnalysisOutcome::from(InspectError::from(e));
            serde_json::to_string_pretty(&fallback)
                .unwrap_or_else(|_| String::from(r#"{"error": "serialization failed"}"#))
        }
    }
}
