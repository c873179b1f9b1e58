//! CLI entry point for the grade reporter.
//!
//! Builds the sample roster, grades each student, and prints one summary
//! line per student to stdout. Diagnostics go to stderr via `tracing`.

use anyhow::Result;
use clap::Parser;
use grade_reporter::{report::write_report, roster::Roster};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_reporter")]
#[command(about = "Prints per-student average scores and letter grades", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // Logging setup: colored stderr, filterable via RUST_LOG
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    tracing_subscriber::registry().with(stderr_layer).init();

    let Cli {} = Cli::parse();

    let roster = Roster::new()
        .with_student("Alice", vec![95.0, 85.0, 100.0])
        .with_student("Bob", vec![70.0, 65.0, 60.0]);

    info!(students = roster.len(), "Grading roster");

    let stdout = std::io::stdout();
    write_report(&roster, &mut stdout.lock())?;

    Ok(())
}
