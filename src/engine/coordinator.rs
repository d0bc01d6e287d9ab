// src/engine/coordinator.rs

use tokio::sync::oneshot;
use tracing::{debug, error};

use crate::errors::{CmdTimerError, Result};
use crate::exec::ProcessBackend;
use crate::render::Renderer;
use crate::timer::{RunState, TimerOptions, run_timer, status_channel};
use crate::types::ChildStatus;

/// Exit code when the child never produced a status.
pub const NO_STATUS_EXIT_CODE: i32 = 127;

/// Offset added to a signal number, as shells report signal deaths.
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// Map the child's status onto the wrapper's own exit code.
pub fn exit_code(status: Option<ChildStatus>) -> i32 {
    match status {
        None => NO_STATUS_EXIT_CODE,
        Some(ChildStatus::Signaled(sig)) => SIGNAL_EXIT_BASE + sig,
        Some(ChildStatus::Exited(code)) => code,
    }
}

/// Result of a coordinated run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutcome {
    /// Status recorded by the process runner, if any.
    pub status: Option<ChildStatus>,
    /// Last state seen by the timer; `None` when rendering was aborted.
    pub timer: Option<RunState>,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        exit_code(self.status)
    }
}

/// Runs the process backend and the timer side by side.
///
/// The timer task is only spawned after the backend reports a launched
/// child. Both tasks are always joined before returning.
pub struct Coordinator<B: ProcessBackend> {
    backend: B,
    options: TimerOptions,
}

impl<B: ProcessBackend> Coordinator<B> {
    pub fn new(backend: B, options: TimerOptions) -> Self {
        Self { backend, options }
    }

    pub async fn run(self, renderer: Box<dyn Renderer>) -> Result<RunOutcome> {
        let (recorder, status_watch) = status_channel();
        let (handoff_tx, handoff_rx) = oneshot::channel::<()>();

        let runner = tokio::spawn(self.backend.launch(handoff_tx, recorder));

        if handoff_rx.await.is_err() {
            // The backend dropped the handoff: nothing was launched.
            return match runner.await {
                Ok(Err(err)) => Err(err),
                Ok(Ok(status)) => Err(CmdTimerError::Other(anyhow::anyhow!(
                    "process backend finished ({status}) without reporting a launch"
                ))),
                Err(join_err) => Err(CmdTimerError::Other(anyhow::anyhow!(
                    "process runner task failed: {join_err}"
                ))),
            };
        }
        debug!("child launched; starting timer");

        let options = self.options;
        let timer = tokio::spawn(async move {
            let mut renderer = renderer;
            run_timer(renderer.as_mut(), status_watch, options).await
        });

        let status = match runner.await {
            Ok(Ok(status)) => Some(status),
            Ok(Err(err)) => {
                error!(error = %err, "process runner failed after launch");
                None
            }
            Err(join_err) => {
                error!(error = %join_err, "process runner task failed");
                None
            }
        };
        debug!(?status, "process runner joined");

        let timer_state = match timer.await {
            Ok(Ok(state)) => Some(state),
            Ok(Err(err)) => {
                error!(error = %err, "rendering aborted");
                None
            }
            Err(join_err) => {
                error!(error = %join_err, "timer task failed");
                None
            }
        };
        debug!("timer joined");

        Ok(RunOutcome {
            status,
            timer: timer_state,
        })
    }
}
