use crate::board::Board;
use crate::coord::Coord;

pub mod board;
pub mod coord;
pub mod engine;
pub mod piece;

pub mod mock;

/// Trait for delivering square-activation signals to the engine.
///
/// Abstracts over input mechanisms (mouse clicks, terminal commands,
/// scripted sequences), providing a uniform interface for
/// [`engine::GameEngine`]. One signal is one interaction, resolved by the
/// implementation to the set of squares it touched; the engine requires that
/// set to contain at most one square.
pub trait SquareInput {
    /// Error type for input delivery failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Resolve the next interaction into the squares it touched.
    ///
    /// Returns `Ok(None)` once the input source is exhausted.
    fn next_signal(&mut self) -> Result<Option<Vec<Coord>>, Self::Error>;
}

/// Trait for presenting board state to the player.
///
/// Abstracts over rendering targets (terminal, GUI), providing a uniform
/// interface for the output side of the interaction loop. Mirrors
/// [`SquareInput`] on the input side.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the board's occupancy and highlight state.
    ///
    /// Implementations read each tile's occupant glyph and pending
    /// candidate to decide how to draw it.
    fn show(&mut self, board: &Board) -> Result<(), Self::Error>;
}
