use std::io;

use em_fields::demo::{run_demo, DemoConfig};
use em_fields::errors::EmFieldsError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prints the demonstration report. A failed write to stdout exits non-zero.
fn main() -> Result<(), EmFieldsError> {
    // Diagnostics go to stderr so stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let stdout = io::stdout();
    run_demo(&DemoConfig::default(), stdout.lock())?;
    Ok(())
}
