// src/timer/state.rs

use std::time::Duration;

use tokio::sync::watch;

use crate::types::ChildStatus;

/// Create the completion channel shared by the process runner and the timer.
///
/// The runner keeps the [`StatusRecorder`], the timer keeps the
/// [`StatusWatch`].
pub fn status_channel() -> (StatusRecorder, StatusWatch) {
    let (tx, rx) = watch::channel(None);
    (StatusRecorder { tx }, StatusWatch { rx })
}

/// Write side of the child's exit status.
///
/// `record` consumes the recorder, so the status goes from absent to present
/// at most once and is never reset. Dropping the recorder without recording
/// also wakes the timer; the run then ends without a status.
#[derive(Debug)]
pub struct StatusRecorder {
    tx: watch::Sender<Option<ChildStatus>>,
}

impl StatusRecorder {
    pub fn record(self, status: ChildStatus) {
        self.tx.send_replace(Some(status));
    }
}

/// Read side of the child's exit status.
#[derive(Debug, Clone)]
pub struct StatusWatch {
    rx: watch::Receiver<Option<ChildStatus>>,
}

impl StatusWatch {
    /// The status right now, `None` while the child is running.
    pub fn current(&self) -> Option<ChildStatus> {
        *self.rx.borrow()
    }

    /// Wait up to `timeout` for the child to finish.
    ///
    /// Returns `true` once a status is present or the recorder is gone,
    /// `false` if the timeout elapsed first.
    pub async fn wait_timeout(&mut self, timeout: Duration) -> bool {
        match tokio::time::timeout(timeout, self.rx.wait_for(Option::is_some)).await {
            Ok(Ok(_)) => true,
            Ok(Err(_closed)) => true,
            Err(_elapsed) => false,
        }
    }
}

/// What the renderers see on every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunState {
    pub status: Option<ChildStatus>,
    pub elapsed: Duration,
    /// Whether the whole elapsed seconds changed since the previous tick.
    pub tick_changed: bool,
    last_whole_secs: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state frozen at `elapsed`, with `tick_changed` cleared.
    pub fn at(elapsed: Duration, status: Option<ChildStatus>) -> Self {
        Self {
            status,
            elapsed,
            tick_changed: false,
            last_whole_secs: elapsed.as_secs(),
        }
    }

    /// Advance to a new observation of elapsed time and status.
    pub fn observe(&mut self, elapsed: Duration, status: Option<ChildStatus>) {
        let whole = elapsed.as_secs();
        self.tick_changed = whole != self.last_whole_secs;
        self.last_whole_secs = whole;
        self.elapsed = elapsed;
        self.status = status;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn whole_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }
}
