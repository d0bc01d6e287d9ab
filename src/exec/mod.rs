// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`request`] parses redirections and variable declarations into an
//!   [`ExecutionRequest`].
//! - [`script`] quotes and assembles the `shell -c` script.
//! - [`runner`] resolves the child's stdio, launches it and waits.
//! - [`backend`] provides the `ProcessBackend` trait the coordinator uses,
//!   which tests can replace with a fake implementation.

pub mod backend;
pub mod request;
pub mod runner;
pub mod script;

pub use backend::{BackendFuture, ProcessBackend};
pub use request::{EnvAssignment, ExecutionRequest, OpenMode, RedirectTarget, Redirection};
pub use runner::{ProcessRunner, StdioPlan, resolve_program};
