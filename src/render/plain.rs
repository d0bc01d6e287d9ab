// src/render/plain.rs

//! Output for non-terminals: the message, one dot per elapsed second, then
//! `done` or `fail`.

use std::io::Write;

use crate::errors::Result;
use crate::render::Renderer;
use crate::render::terminal::TerminalWriter;
use crate::timer::RunState;

pub const PROGRESS_MARK: &str = ".";
pub const DONE_WORD: &str = "done\n";
pub const FAIL_WORD: &str = "fail\n";

#[derive(Debug)]
pub struct PlainRenderer<W: Write> {
    out: TerminalWriter<W>,
    message: String,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W, message: impl Into<String>) -> Self {
        Self {
            out: TerminalWriter::new(out),
            message: message.into(),
        }
    }
}

impl<W: Write + Send> Renderer for PlainRenderer<W> {
    fn begin(&mut self) -> Result<()> {
        self.out.write_flush(&format!("{} ", self.message))
    }

    fn initial(&mut self, _state: &RunState) -> Result<()> {
        Ok(())
    }

    fn tick(&mut self, state: &RunState) -> Result<()> {
        if state.tick_changed {
            self.out.write_flush(PROGRESS_MARK)?;
        }
        Ok(())
    }

    fn finish(&mut self, state: &RunState) -> Result<()> {
        let word = if state.status.is_some_and(|s| s.success()) {
            DONE_WORD
        } else {
            FAIL_WORD
        };
        self.out.write_flush(word)
    }
}
