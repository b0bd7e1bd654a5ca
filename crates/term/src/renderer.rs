//! TerminalRenderer: draws render events on a real terminal.
//!
//! Frames are encoded into a byte buffer with crossterm commands first and
//! written to stdout in one go, so a frame never shows half drawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::board_view::board_lines;
use crate::core::{RenderEvent, Renderer};

const STATUS_RUNNING: &str = "arrows/wasd/hjkl: move & rotate  p: pause  q: quit";
const STATUS_PAUSED: &str = "paused - p to resume, q to quit";
const STATUS_FINISHED: &str = "finished";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last board drawn, kept so status changes can redraw it
    lines: Vec<String>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            lines: Vec::new(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        log::debug!("terminal entered raw mode");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::debug!("terminal restored");
        Ok(())
    }

    fn draw(&mut self, status: &str) -> io::Result<()> {
        self.buf.clear();
        encode_frame_into(&self.lines, status, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, event: RenderEvent) -> io::Result<()> {
        match event {
            RenderEvent::Update(grid) => {
                self.lines = board_lines(&grid);
                self.draw(STATUS_RUNNING)
            }
            RenderEvent::Stop => self.draw(STATUS_PAUSED),
            RenderEvent::Finish => self.draw(STATUS_FINISHED),
        }
    }
}

/// Encode a full frame (board rows plus a status line) into `out`.
///
/// The first screen row is left blank. Each row is cleared to its end so a
/// shorter status line fully replaces a longer one.
pub fn encode_frame_into(lines: &[String], status: &str, out: &mut Vec<u8>) -> io::Result<()> {
    let mut row: u16 = 1;
    for line in lines {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(line))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        row = row.saturating_add(1);
    }

    out.queue(cursor::MoveTo(0, row.saturating_add(1)))?;
    out.queue(Print(status))?;
    out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    Ok(())
}
