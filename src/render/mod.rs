// src/render/mod.rs

//! Renderers driven by the timer loop.
//!
//! - [`plain`] writes a dot per second, for pipes and log files.
//! - [`fancy`] redraws a single status line in place on a terminal.
//! - [`terminal`] is the shared output sink and its control sequences.

pub mod fancy;
pub mod plain;
pub mod terminal;

use std::io::{self, IsTerminal, Write};

use crate::config::Settings;
use crate::errors::Result;
use crate::format::LineFormatter;
use crate::timer::RunState;

pub use fancy::FancyRenderer;
pub use plain::PlainRenderer;
pub use terminal::TerminalWriter;

/// Callbacks invoked by [`crate::timer::run_timer`].
///
/// `begin` runs once before anything else, `initial` only while the
/// configured delay is pending, `tick` on every interval and `finish` once
/// the child has exited.
pub trait Renderer: Send {
    fn begin(&mut self) -> Result<()>;
    fn initial(&mut self, state: &RunState) -> Result<()>;
    fn tick(&mut self, state: &RunState) -> Result<()>;
    fn finish(&mut self, state: &RunState) -> Result<()>;
}

/// Pick the renderer for stderr: fancy on a terminal unless `plain` is set.
pub fn select_renderer(settings: &Settings) -> Box<dyn Renderer> {
    let fancy = io::stderr().is_terminal() && !settings.plain;
    build_renderer(settings, io::stderr(), fancy)
}

/// Build a renderer writing to `out`.
pub fn build_renderer<W>(settings: &Settings, out: W, fancy: bool) -> Box<dyn Renderer>
where
    W: Write + Send + 'static,
{
    if fancy {
        let formatter = LineFormatter::new(
            settings.templates.clone(),
            settings.message.clone(),
            settings.indent,
        );
        Box::new(FancyRenderer::new(
            out,
            formatter,
            settings.leave,
            settings.hide_cursor,
        ))
    } else {
        Box::new(PlainRenderer::new(out, settings.message.clone()))
    }
}
