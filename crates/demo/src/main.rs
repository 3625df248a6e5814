//! Runs the memento demonstration and prints each step to stdout.
//!
//! ```sh
//! cargo run -p memento-demo
//! ```

use std::{io, process::ExitCode};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match memento_demo::run(&mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "demonstration failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
