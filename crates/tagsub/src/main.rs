//! tagsub CLI - Main entry point
//!
//! Renders each template file in turn to standard output. All files share
//! one variable table, so a file may reference variables defined by the
//! files before it.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tagsub_template::TemplatingState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tagsub")]
#[command(version)]
#[command(about = "Render tag-substitution templates to standard output", long_about = None)]
struct Args {
    /// Template files, processed in order with shared definitions
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never mix with rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagsub=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let mut state = TemplatingState::new();

    for file in &args.files {
        tracing::info!(file = %file.display(), "Rendering");

        let result = state.process_file(file, &mut out);
        out.flush().context("Failed to write to standard output")?;

        if let Err(err) = result {
            tracing::debug!(kind = ?err.kind(), "Stopping at first error");
            eprint!("{}", err.to_diagnostic().to_text(Some(state.sources())));
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
