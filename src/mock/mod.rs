mod display;
mod script;
mod terminal;

pub use display::TerminalDisplay;
pub use script::{ParseError, ScriptedInput};
pub use terminal::{InteractiveInput, run_interactive_terminal};

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Color, Piece};

/// Places the standard chess starting position onto `board`.
///
/// Piece placement is the consumer's job; the engine itself starts from
/// whatever the board holds.
pub fn setup_standard(board: &mut Board) {
    let back_rank: [fn(Color) -> Piece; 8] = [
        Piece::rook,
        Piece::knight,
        Piece::bishop,
        Piece::queen,
        Piece::king,
        Piece::bishop,
        Piece::knight,
        Piece::rook,
    ];

    for (color, pawn_rank, home_rank) in [(Color::White, 1, 0), (Color::Black, 6, 7)] {
        for file in 0..8u8 {
            let pawn = board.add_piece(Piece::pawn(color));
            board.place(pawn, Coord::at(file, pawn_rank));

            let piece = board.add_piece(back_rank[file as usize](color));
            board.place(piece, Coord::at(file, home_rank));
        }
    }
}
