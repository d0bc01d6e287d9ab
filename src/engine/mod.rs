// src/engine/mod.rs

//! Orchestration: starts the process runner, hands off to the timer once
//! the child exists, joins both and turns the child's status into the
//! wrapper's exit code.

pub mod coordinator;
pub mod signals;

pub use coordinator::{
    Coordinator, NO_STATUS_EXIT_CODE, RunOutcome, SIGNAL_EXIT_BASE, exit_code,
};
pub use signals::suppress_termination_signals;
