//! # Display Management
//!
//! Writes menus, prompts, maps and event messages to a text console.

use crate::game::{Difficulty, Position};
use crate::generation::Grid;
use crate::rendering::render_map;
use crate::CrawlResult;
use std::io::Write;

/// Console display manager for the game.
///
/// Wraps any writer, so the same code drives stdout in the binary and an
/// in-memory buffer in tests.
pub struct TerminalDisplay<W> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    /// Creates a new display writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Prints the difficulty menu and the choice prompt.
    pub fn show_difficulty_menu(&mut self) -> CrawlResult<()> {
        writeln!(self.out, "Choose Difficulty Level:")?;
        for (number, difficulty) in Difficulty::menu().into_iter().enumerate() {
            let size = difficulty.profile().size;
            writeln!(self.out, "{}. {} ({}x{})", number + 1, difficulty, size, size)?;
        }
        write!(self.out, "Enter your choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints the per-turn move prompt.
    pub fn prompt_move(&mut self) -> CrawlResult<()> {
        write!(
            self.out,
            "Move (w/a/s/d) --> means (up, left, down and right) "
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints the concealed map, optionally under a heading.
    pub fn show_map(&mut self, heading: Option<&str>, grid: &Grid, player: Position) -> CrawlResult<()> {
        if let Some(heading) = heading {
            writeln!(self.out, "{heading}")?;
        }
        write!(self.out, "{}", render_map(grid, player))?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints a message on its own line.
    pub fn add_message(&mut self, message: impl AsRef<str>) -> CrawlResult<()> {
        writeln!(self.out, "{}", message.as_ref())?;
        Ok(())
    }

    /// Terminates a prompt line that got no answer.
    pub fn end_line(&mut self) -> CrawlResult<()> {
        writeln!(self.out)?;
        Ok(())
    }

    /// Consumes the display and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
