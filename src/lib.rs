// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod format;
pub mod logging;
pub mod render;
pub mod timer;
pub mod types;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{Settings, load_and_validate};
use crate::engine::{Coordinator, RunOutcome, suppress_termination_signals};
use crate::errors::Result;
use crate::exec::{ExecutionRequest, ProcessRunner};
use crate::render::{Renderer, select_renderer};
use crate::timer::TimerOptions;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and merging with the CLI
/// - signal suppression
/// - renderer selection (fancy on a terminal, plain otherwise)
/// - the coordinator
///
/// Returns the exit code the wrapper should terminate with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let file = match args.config {
        Some(ref path) => Some(load_and_validate(path)?),
        None => None,
    };
    let settings = Settings::resolve(&args, file.as_ref())?;
    debug!(?settings, "resolved settings");

    suppress_termination_signals()?;

    let renderer = select_renderer(&settings);
    let outcome = run_with_renderer(&settings, renderer).await?;
    Ok(outcome.exit_code())
}

/// Run the configured command with an explicit renderer.
///
/// Malformed redirects fail here before anything is launched.
pub async fn run_with_renderer(
    settings: &Settings,
    renderer: Box<dyn Renderer>,
) -> Result<RunOutcome> {
    let request = ExecutionRequest::from_settings(settings)?;
    let coordinator = Coordinator::new(ProcessRunner::new(request), TimerOptions::from(settings));
    coordinator.run(renderer).await
}
