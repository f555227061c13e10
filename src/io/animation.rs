//! Terminal animation of generation steps

use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::{QueueableCommand, cursor, terminal};

use crate::algorithm::observer::StepObserver;
use crate::io::error::{MazeError, Result};
use crate::render::TextRenderer;
use crate::spatial::Grid;

/// Redraws the partial maze in place after every step
///
/// Each frame is written to the sink, the cursor is moved back to the top
/// left corner so the next frame overwrites it, and the thread sleeps for
/// the configured delay. With a zero delay every step is skipped.
pub struct TerminalAnimation<W: Write> {
    out: W,
    renderer: TextRenderer,
    delay: Duration,
    frames: usize,
}

impl<W: Write> TerminalAnimation<W> {
    /// Create an animation writing to `out`
    pub const fn new(out: W, delay: Duration) -> Self {
        Self {
            out,
            renderer: TextRenderer::new(),
            delay,
            frames: 0,
        }
    }

    /// Check if steps are drawn at all
    pub const fn is_enabled(&self) -> bool {
        !self.delay.is_zero()
    }

    /// Number of frames drawn so far
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Clear the screen before the first frame
    ///
    /// # Errors
    ///
    /// Returns an output error if the terminal cannot be written
    pub fn begin(&mut self) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.out
            .queue(terminal::Clear(terminal::ClearType::All))
            .and_then(|out| out.queue(cursor::MoveTo(0, 0)))
            .and_then(|out| out.flush())
            .map_err(|source| MazeError::Output {
                operation: "clear screen",
                source,
            })
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepObserver for TerminalAnimation<W> {
    fn on_step(&mut self, grid: &Grid) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let frame = self.renderer.render(grid)?;
        self.out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.queue(cursor::MoveTo(0, 0)).map(|_| ()))
            .and_then(|()| self.out.flush())
            .map_err(|source| MazeError::Output {
                operation: "draw frame",
                source,
            })?;

        self.frames += 1;
        thread::sleep(self.delay);
        Ok(())
    }
}
