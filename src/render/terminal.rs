// src/render/terminal.rs

use std::io::Write;

use crate::errors::Result;

pub const SAVE_POS: &str = "\x1b[s";
pub const RESTORE_POS: &str = "\x1b[u";
pub const CLEAR_LINE: &str = "\x1b[0K";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Synchronous output sink for the status line. Nothing reaches the
/// terminal until a flush.
#[derive(Debug)]
pub struct TerminalWriter<W: Write> {
    out: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Buffer `text` without flushing.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn write_flush(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
