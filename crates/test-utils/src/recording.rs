use std::sync::{Arc, Mutex};
use std::time::Duration;

use cmdtimer::errors::{CmdTimerError, Result};
use cmdtimer::render::Renderer;
use cmdtimer::timer::RunState;

/// One call made by the timer loop.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Begin,
    Initial(RunState),
    Tick(RunState),
    Finish(RunState),
}

impl RenderEvent {
    pub fn state(&self) -> Option<&RunState> {
        match self {
            RenderEvent::Begin => None,
            RenderEvent::Initial(s) | RenderEvent::Tick(s) | RenderEvent::Finish(s) => Some(s),
        }
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.state().map(|s| s.elapsed)
    }
}

/// A renderer that records every callback instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Arc<Mutex<Vec<RenderEvent>>>,
    fail_on_tick: Option<usize>,
    ticks: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `n`th tick (1-based) return a template error.
    pub fn failing_on_tick(n: usize) -> Self {
        Self {
            fail_on_tick: Some(n),
            ..Self::default()
        }
    }

    /// A handle to the recorded events that stays valid after the renderer
    /// has been moved into the coordinator.
    pub fn events(&self) -> Arc<Mutex<Vec<RenderEvent>>> {
        Arc::clone(&self.events)
    }

    fn push(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self) -> Result<()> {
        self.push(RenderEvent::Begin);
        Ok(())
    }

    fn initial(&mut self, state: &RunState) -> Result<()> {
        self.push(RenderEvent::Initial(*state));
        Ok(())
    }

    fn tick(&mut self, state: &RunState) -> Result<()> {
        self.ticks += 1;
        if self.fail_on_tick == Some(self.ticks) {
            return Err(CmdTimerError::Template("unknown field {bogus}".to_string()));
        }
        self.push(RenderEvent::Tick(*state));
        Ok(())
    }

    fn finish(&mut self, state: &RunState) -> Result<()> {
        self.push(RenderEvent::Finish(*state));
        Ok(())
    }
}
