use super::data::Grid;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Draws grids as text, one frame per generation.
pub struct Console<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    /// Draws a frame: the grid followed by a status line. When clearing is
    /// enabled the previous frame is wiped and the cursor sent home first.
    pub fn show(&mut self, grid: &Grid) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(self.out, "{grid}")?;
        writeln!(
            self.out,
            "Generation {}, {} alive",
            grid.generation(),
            grid.alive_count()
        )?;
        self.out.flush()
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
