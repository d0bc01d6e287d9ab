use std::time::Duration;

use tokio::sync::oneshot;

use cmdtimer::errors::CmdTimerError;
use cmdtimer::exec::{BackendFuture, ProcessBackend};
use cmdtimer::timer::StatusRecorder;
use cmdtimer::types::ChildStatus;

/// What the fake child does.
#[derive(Debug, Clone)]
enum Behaviour {
    /// "Run" for the given time, then finish with the status.
    Finish(Duration, ChildStatus),
    /// Fail before launching anything.
    FailLaunch(String),
    /// Launch, then lose the child without a status.
    LoseStatus(Duration),
}

/// A `ProcessBackend` that never touches the OS.
///
/// Uses `tokio::time::sleep`, so it plays well with paused time.
#[derive(Debug, Clone)]
pub struct FakeProcess {
    behaviour: Behaviour,
}

impl FakeProcess {
    pub fn finishing_after(runtime: Duration, status: ChildStatus) -> Self {
        Self {
            behaviour: Behaviour::Finish(runtime, status),
        }
    }

    pub fn exiting(code: i32) -> Self {
        Self::finishing_after(Duration::ZERO, ChildStatus::Exited(code))
    }

    pub fn failing_to_launch(command: &str) -> Self {
        Self {
            behaviour: Behaviour::FailLaunch(command.to_string()),
        }
    }

    pub fn losing_status_after(runtime: Duration) -> Self {
        Self {
            behaviour: Behaviour::LoseStatus(runtime),
        }
    }
}

impl ProcessBackend for FakeProcess {
    fn launch(self, handoff: oneshot::Sender<()>, recorder: StatusRecorder) -> BackendFuture {
        Box::pin(async move {
            match self.behaviour {
                Behaviour::Finish(runtime, status) => {
                    let _ = handoff.send(());
                    tokio::time::sleep(runtime).await;
                    recorder.record(status);
                    Ok(status)
                }
                Behaviour::FailLaunch(command) => Err(CmdTimerError::CommandNotFound(command)),
                Behaviour::LoseStatus(runtime) => {
                    let _ = handoff.send(());
                    tokio::time::sleep(runtime).await;
                    drop(recorder);
                    Err(CmdTimerError::Other(anyhow::anyhow!("child vanished")))
                }
            }
        })
    }
}
