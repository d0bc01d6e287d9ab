// src/timer/mod.rs

//! Elapsed-time tracking and the render loop that runs beside the child.

pub mod state;
pub mod ticker;

pub use state::{RunState, StatusRecorder, StatusWatch, status_channel};
pub use ticker::{TimerOptions, TimerPhase, run_timer};
