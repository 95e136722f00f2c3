//! Voidkeeper Entry Point
//!
//! Plays the void sequence once on stdout and exits.
//!
//! Environment:
//!   REDUCE_MOTION   reduce | none   slow down or freeze animations
//!   NO_COLOR        disable colors
//!   FORCE_COLOR     keep colors even when not on a terminal
//!   FORCE_HYPERLINK 1 | 0           override hyperlink detection
//!   RUST_LOG        tracing filter
//!                   (default: voidkeeper=warn,voidkeeper_tui=warn,voidkeeper_core=warn)

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use tracing::info;

use voidkeeper_core::{PresenterConfig, Script};
use voidkeeper_tui::{report_failure, Presenter, TerminalSurface};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("voidkeeper: {e}");
    }

    let config = PresenterConfig::from_env(io::stdout().is_terminal());
    let script = Script::voidkeeper();
    info!(?config, "Starting voidkeeper");

    let mut presenter = Presenter::new(TerminalSurface::new(io::stdout()), &script, &config);
    let result = presenter.run().await;
    // End any half-drawn line and show the cursor before reporting
    drop(presenter);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = report_failure(&err, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "voidkeeper=warn,voidkeeper_tui=warn,voidkeeper_core=warn";

/// Log to stderr so stdout carries only the sequence
fn init_logging() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
