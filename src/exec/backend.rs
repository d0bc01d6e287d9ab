// src/exec/backend.rs

//! Pluggable process backend.
//!
//! The coordinator talks to a `ProcessBackend` instead of spawning processes
//! itself, so tests can drive it with a fake child that never touches the OS.

use std::future::Future;
use std::pin::Pin;

use tokio::sync::oneshot;

use crate::errors::Result;
use crate::exec::runner::ProcessRunner;
use crate::timer::StatusRecorder;
use crate::types::ChildStatus;

pub type BackendFuture = Pin<Box<dyn Future<Output = Result<ChildStatus>> + Send + 'static>>;

/// Something that launches a child and waits for it.
///
/// Implementations must:
/// - send on `handoff` exactly once, right after the child exists and before
///   waiting on it (dropping `handoff` instead signals a launch failure);
/// - hand the final status to `recorder` before resolving.
pub trait ProcessBackend: Send + 'static {
    fn launch(self, handoff: oneshot::Sender<()>, recorder: StatusRecorder) -> BackendFuture;
}

impl ProcessBackend for ProcessRunner {
    fn launch(self, handoff: oneshot::Sender<()>, recorder: StatusRecorder) -> BackendFuture {
        Box::pin(self.run(handoff, recorder))
    }
}
