// src/timer/ticker.rs

//! The timer loop.
//!
//! ```text
//! Delaying ──(delay elapsed)──▶ Ticking ──(child done)──▶ Done
//!     └───────────(child done)──────────────────────────▲
//! ```
//!
//! `Delaying` is only entered when a delay is configured; it renders the
//! initial line once and waits. `Ticking` renders the standard line and
//! waits one interval. `Done` renders the final line and returns. Every
//! render is preceded by a fresh elapsed-time observation.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, trace};

use crate::config::Settings;
use crate::errors::Result;
use crate::render::Renderer;
use crate::timer::state::{RunState, StatusWatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerOptions {
    pub delay: Duration,
    pub interval: Duration,
}

impl From<&Settings> for TimerOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            delay: settings.delay(),
            interval: settings.interval(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Delaying,
    Ticking,
    Done,
}

impl TimerPhase {
    pub fn initial(options: &TimerOptions) -> Self {
        if options.delay.is_zero() {
            TimerPhase::Ticking
        } else {
            TimerPhase::Delaying
        }
    }
}

/// Drive `renderer` until the child finishes.
///
/// Must only be started after the child has been launched. Returns the last
/// observed state; a render error stops the loop and is returned as-is.
pub async fn run_timer<R>(
    renderer: &mut R,
    mut status: StatusWatch,
    options: TimerOptions,
) -> Result<RunState>
where
    R: Renderer + ?Sized,
{
    let start = Instant::now();
    let mut state = RunState::new();
    let mut phase = TimerPhase::initial(&options);
    debug!(?phase, ?options, "timer started");

    renderer.begin()?;

    loop {
        state.observe(start.elapsed(), status.current());

        phase = match phase {
            TimerPhase::Delaying => {
                renderer.initial(&state)?;
                if status.wait_timeout(options.delay).await {
                    debug!("child finished during the initial delay");
                    TimerPhase::Done
                } else {
                    TimerPhase::Ticking
                }
            }
            TimerPhase::Ticking => {
                trace!(elapsed = state.elapsed_secs(), changed = state.tick_changed, "tick");
                renderer.tick(&state)?;
                if status.wait_timeout(options.interval).await {
                    TimerPhase::Done
                } else {
                    TimerPhase::Ticking
                }
            }
            TimerPhase::Done => {
                renderer.finish(&state)?;
                debug!(elapsed = state.elapsed_secs(), status = ?state.status, "timer done");
                return Ok(state);
            }
        };
    }
}
