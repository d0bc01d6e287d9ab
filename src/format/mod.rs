// src/format/mod.rs

//! Format resolution: turns the run state plus the configured templates into
//! the text for the initial, standard and final lines.
//!
//! - [`template`] does the `{name:spec}` interpolation.
//! - [`ansi`] provides the `F.*` escape-sequence namespace.
//! - [`context`] resolves the per-render values in dependency order.

pub mod ansi;
pub mod context;
pub mod template;

pub use context::{RenderContext, StatusGlyph};
pub use template::{Value, Vars, interpolate};

use crate::errors::Result;
use crate::timer::RunState;

pub const DEFAULT_STANDARD: &str = "{i}{F.fg.B}{status} {F.fg.B}{timer}{F.X} {msg} ";
pub const DEFAULT_INITIAL: &str = DEFAULT_STANDARD;
pub const DEFAULT_MESSAGE: &str = "{raw_msg}";
pub const DEFAULT_FINAL: &str = "{i}{status} {F.D}{timer}{F.X} {msg}\n";
pub const DEFAULT_TIMER: &str = "{min:02d}:{sec:02d}";
pub const DEFAULT_ZERO_TIMER: &str = " ··· ";
pub const DEFAULT_RUNNING: &str = "•";
pub const DEFAULT_SUCCESS: &str = "{F.fg.G}✔{F.X}";
pub const DEFAULT_FAILURE: &str = "{F.fg.R}✘{F.X}";

/// The user-adjustable templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub standard: String,
    pub initial: String,
    pub message: String,
    pub final_: String,
    pub timer: String,
    pub zero_timer: String,
    pub running: String,
    pub success: String,
    pub failure: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            standard: DEFAULT_STANDARD.to_string(),
            initial: DEFAULT_INITIAL.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            final_: DEFAULT_FINAL.to_string(),
            timer: DEFAULT_TIMER.to_string(),
            zero_timer: DEFAULT_ZERO_TIMER.to_string(),
            running: DEFAULT_RUNNING.to_string(),
            success: DEFAULT_SUCCESS.to_string(),
            failure: DEFAULT_FAILURE.to_string(),
        }
    }
}

/// Which line template a render uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Initial,
    Standard,
    Final,
}

/// Renders full status lines.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    pub templates: Templates,
    /// The raw `-m` message; itself a template.
    pub message: String,
    pub indent: usize,
}

impl LineFormatter {
    pub fn new(templates: Templates, message: impl Into<String>, indent: usize) -> Self {
        Self {
            templates,
            message: message.into(),
            indent,
        }
    }

    pub fn render(&self, kind: LineKind, state: &RunState) -> Result<String> {
        let ctx = RenderContext::resolve(self, state, kind)?;
        let template = match kind {
            LineKind::Initial => &self.templates.initial,
            LineKind::Standard => &self.templates.standard,
            LineKind::Final => &self.templates.final_,
        };
        ctx.render(template)
    }
}
