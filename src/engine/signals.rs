// src/engine/signals.rs

use tokio::signal::unix::{SignalKind, signal};
use tracing::debug;

use crate::errors::Result;

/// Replace the default kill action of SIGINT and SIGTERM for this process
/// with a no-op.
///
/// The child is in the same process group and gets its own copy of a
/// terminal-generated signal, so its exit status decides what happens.
/// Must be called from inside the tokio runtime.
pub fn suppress_termination_signals() -> Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::spawn(async move {
        loop {
            tokio::select! {
                Some(()) = sigint.recv() => debug!("ignoring SIGINT"),
                Some(()) = sigterm.recv() => debug!("ignoring SIGTERM"),
                else => break,
            }
        }
    });

    Ok(())
}
