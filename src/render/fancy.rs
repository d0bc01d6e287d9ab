// src/render/fancy.rs

//! In-place status line for interactive terminals.
//!
//! The cursor position is saved once at the start; every redraw restores it,
//! saves it again, writes the line and clears the rest of it, so the line is
//! rewritten without scrolling.

use std::io::Write;

use tracing::warn;

use crate::errors::Result;
use crate::format::{LineFormatter, LineKind};
use crate::render::Renderer;
use crate::render::terminal::{
    CLEAR_LINE, HIDE_CURSOR, RESTORE_POS, SAVE_POS, SHOW_CURSOR, TerminalWriter,
};
use crate::timer::RunState;
use crate::types::LeaveMode;

#[derive(Debug)]
pub struct FancyRenderer<W: Write> {
    out: TerminalWriter<W>,
    formatter: LineFormatter,
    leave: LeaveMode,
    hide_cursor: bool,
    cursor_hidden: bool,
}

impl<W: Write> FancyRenderer<W> {
    pub fn new(out: W, formatter: LineFormatter, leave: LeaveMode, hide_cursor: bool) -> Self {
        Self {
            out: TerminalWriter::new(out),
            formatter,
            leave,
            hide_cursor,
            cursor_hidden: false,
        }
    }

    fn show_cursor(&mut self) -> Result<()> {
        if self.cursor_hidden {
            self.out.write_flush(SHOW_CURSOR)?;
            self.cursor_hidden = false;
        }
        Ok(())
    }
}

impl<W: Write + Send> Renderer for FancyRenderer<W> {
    fn begin(&mut self) -> Result<()> {
        if self.hide_cursor {
            self.out.write(HIDE_CURSOR)?;
            self.cursor_hidden = true;
        }
        self.out.write(SAVE_POS)?;
        self.out.write_flush(CLEAR_LINE)
    }

    fn initial(&mut self, state: &RunState) -> Result<()> {
        let line = self.formatter.render(LineKind::Initial, state)?;
        self.out.write_flush(&line)
    }

    fn tick(&mut self, state: &RunState) -> Result<()> {
        let line = self.formatter.render(LineKind::Standard, state)?;
        self.out.write(RESTORE_POS)?;
        self.out.write(SAVE_POS)?;
        self.out.write(&line)?;
        self.out.write_flush(CLEAR_LINE)
    }

    fn finish(&mut self, state: &RunState) -> Result<()> {
        let final_line = if self.leave.keeps_final(state.status) {
            Some(self.formatter.render(LineKind::Final, state)?)
        } else {
            None
        };

        self.out.write(RESTORE_POS)?;
        self.out.write(CLEAR_LINE)?;
        if let Some(line) = final_line {
            self.out.write(&line)?;
        }
        self.out.flush()?;
        self.show_cursor()
    }
}

impl<W: Write> Drop for FancyRenderer<W> {
    fn drop(&mut self) {
        if let Err(err) = self.show_cursor() {
            warn!(error = %err, "failed to restore cursor visibility");
        }
    }
}
