use std::io::{self, Write};

use crate::BoardDisplay;
use crate::board::Board;
use crate::coord::Coord;

/// Terminal-based board display for development and testing.
///
/// Renders the 8×8 grid with piece glyphs and an ANSI color-coded
/// background on every tile carrying a pending move candidate.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board)
    }
}

/// Render the board to any writer. Extracted for testability.
fn render_board(w: &mut impl Write, board: &Board) -> Result<(), DisplayError> {
    for rank in (0..8u8).rev() {
        write!(w, " {} ", rank + 1)?;
        for file in 0..8u8 {
            let tile = board.tile_at(Coord::at(file, rank));
            let glyph = tile
                .occupant()
                .map(|id| board.piece(id).glyph())
                .unwrap_or("·");
            if tile.candidate().is_some() {
                write!(w, "\x1b[42m {glyph} \x1b[0m")?;
            } else {
                write!(w, " {glyph} ")?;
            }
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}
