// src/format/context.rs

use crate::errors::Result;
use crate::format::template::{Value, Vars, interpolate};
use crate::format::{LineFormatter, LineKind, Templates};
use crate::timer::RunState;
use crate::types::ChildStatus;

/// Which status glyph template applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGlyph {
    Running,
    Success,
    Failure,
}

impl StatusGlyph {
    pub fn from_status(status: Option<ChildStatus>) -> Self {
        match status {
            None => StatusGlyph::Running,
            Some(s) if s.success() => StatusGlyph::Success,
            Some(_) => StatusGlyph::Failure,
        }
    }

    fn template(self, templates: &Templates) -> &str {
        match self {
            StatusGlyph::Running => &templates.running,
            StatusGlyph::Success => &templates.success,
            StatusGlyph::Failure => &templates.failure,
        }
    }
}

/// Values for one render, derived from the run state.
///
/// Names are resolved in a fixed order and every template only sees the
/// names resolved before it, so a template that refers to itself (or to a
/// later stage) fails instead of expanding forever:
///
/// `i`/`min`/`sec` → `raw_msg` → `msg` → `timer` → `status` → zero timer.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub minutes: u64,
    pub seconds: u64,
    pub glyph: StatusGlyph,
    vars: Vars,
}

impl RenderContext {
    pub fn resolve(formatter: &LineFormatter, state: &RunState, kind: LineKind) -> Result<Self> {
        let templates = &formatter.templates;
        let whole = state.whole_secs();
        let (minutes, seconds) = (whole / 60, whole % 60);

        let mut vars = Vars::new();
        vars.set("i", " ".repeat(formatter.indent))
            .set("min", minutes as i64)
            .set("sec", seconds as i64);

        let raw_msg = interpolate(&formatter.message, &vars)?;
        vars.set("raw_msg", raw_msg);

        let msg = interpolate(&templates.message, &vars)?;
        vars.set("msg", msg);

        let timer = interpolate(&templates.timer, &vars)?;
        vars.set("timer", timer);

        let glyph = StatusGlyph::from_status(state.status);
        let status = interpolate(glyph.template(templates), &vars)?;
        vars.set("status", status);

        if (kind == LineKind::Initial || state.status.is_some()) && whole == 0 {
            let zero = interpolate(&templates.zero_timer, &vars)?;
            vars.set("timer", zero);
        }

        Ok(Self {
            minutes,
            seconds,
            glyph,
            vars,
        })
    }

    /// Interpolate a line template with the resolved values.
    pub fn render(&self, template: &str) -> Result<String> {
        interpolate(template, &self.vars)
    }

    /// A resolved string value (`msg`, `timer`, `status`, ...).
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.vars.get(name) {
            Some(Value::Str(s)) => Some(s),
            _ => None,
        }
    }
}
