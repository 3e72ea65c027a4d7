use thiserror::Error;

use crate::board::{Board, MoveEvent, PieceId};
use crate::coord::Coord;

pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;

/// Side a piece plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank direction pawns of this color advance in.
    pub(crate) fn forward(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

/// Move-generation function supplied by a custom piece.
pub type MoveFn = fn(&Board, Coord, &Piece) -> Vec<Coord>;

/// Post-move hook supplied by a custom piece.
pub type MoveHook = fn(&mut Board, PieceId, MoveEvent);

/// A consumer-defined piece: per-color glyphs plus optional behavior.
///
/// With `moves` left as `None` the piece is display-only; asking it for
/// moves fails with [`NoMoveRules`].
#[derive(Debug, Clone)]
pub struct CustomKind {
    pub white_glyph: String,
    pub black_glyph: String,
    pub moves: Option<MoveFn>,
    pub on_move: Option<MoveHook>,
}

/// What a piece is and how it moves.
///
/// Special state (castling eligibility, the en-passant window) lives inside
/// the variants it applies to and is maintained by the post-move hooks.
#[derive(Debug, Clone)]
pub enum Kind {
    Pawn {
        has_moved: bool,
        just_moved_double: bool,
    },
    Knight,
    Bishop,
    Rook {
        has_moved: bool,
    },
    Queen,
    King {
        has_moved: bool,
    },
    Custom(CustomKind),
}

/// Error when a piece without movement rules is asked for moves.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("the '{0}' piece has no movement rules")]
pub struct NoMoveRules(pub String);

/// A movable entity: a kind and a color.
///
/// Placement is owned by the [`Board`]; a piece on its own knows nothing
/// about where (or whether) it stands.
#[derive(Debug, Clone)]
pub struct Piece {
    pub kind: Kind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: Kind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn pawn(color: Color) -> Self {
        Self::new(
            Kind::Pawn {
                has_moved: false,
                just_moved_double: false,
            },
            color,
        )
    }

    pub fn knight(color: Color) -> Self {
        Self::new(Kind::Knight, color)
    }

    pub fn bishop(color: Color) -> Self {
        Self::new(Kind::Bishop, color)
    }

    pub fn rook(color: Color) -> Self {
        Self::new(Kind::Rook { has_moved: false }, color)
    }

    pub fn queen(color: Color) -> Self {
        Self::new(Kind::Queen, color)
    }

    pub fn king(color: Color) -> Self {
        Self::new(Kind::King { has_moved: false }, color)
    }

    /// Display-only custom piece showing `glyph` for either color.
    pub fn custom(glyph: &str, color: Color) -> Self {
        Self::new(
            Kind::Custom(CustomKind {
                white_glyph: glyph.to_owned(),
                black_glyph: glyph.to_owned(),
                moves: None,
                on_move: None,
            }),
            color,
        )
    }

    #[inline]
    pub fn is_white(&self) -> bool {
        self.color == Color::White
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    /// The Unicode symbol this piece displays as.
    pub fn glyph(&self) -> &str {
        match (&self.kind, self.color) {
            (Kind::Custom(custom), Color::White) => &custom.white_glyph,
            (Kind::Custom(custom), Color::Black) => &custom.black_glyph,
            (Kind::Pawn { .. }, Color::White) => "♙",
            (Kind::Pawn { .. }, Color::Black) => "♟",
            (Kind::Knight, Color::White) => "♘",
            (Kind::Knight, Color::Black) => "♞",
            (Kind::Bishop, Color::White) => "♗",
            (Kind::Bishop, Color::Black) => "♝",
            (Kind::Rook { .. }, Color::White) => "♖",
            (Kind::Rook { .. }, Color::Black) => "♜",
            (Kind::Queen, Color::White) => "♕",
            (Kind::Queen, Color::Black) => "♛",
            (Kind::King { .. }, Color::White) => "♔",
            (Kind::King { .. }, Color::Black) => "♚",
        }
    }

    /// Computes candidate destinations for this piece standing at `from`.
    ///
    /// The list may be empty and never contains `from` itself. The board is
    /// consulted for occupancy along the piece's movement paths; nothing is
    /// mutated.
    pub fn generate_moves(&self, board: &Board, from: Coord) -> Result<Vec<Coord>, NoMoveRules> {
        match &self.kind {
            Kind::Pawn { has_moved, .. } => Ok(pawn::moves(board, from, self.color, *has_moved)),
            Kind::Knight => Ok(knight::moves(board, from, self.color)),
            Kind::Bishop => Ok(sliding::moves(board, from, self.color, sliding::BISHOP)),
            Kind::Rook { .. } => Ok(sliding::moves(board, from, self.color, sliding::ROOK)),
            Kind::Queen => Ok(sliding::moves(board, from, self.color, sliding::QUEEN)),
            Kind::King { has_moved } => Ok(king::moves(board, from, self.color, *has_moved)),
            Kind::Custom(custom) => match custom.moves {
                Some(moves) => Ok(moves(board, from, self)),
                None => Err(NoMoveRules(self.glyph().to_owned())),
            },
        }
    }
}

/// Runs the moved piece's post-move hook for a completed placement.
///
/// Called by [`Board::place`] after the board mutation is done;
/// `arrived_on_occupied` reports whether the placement displaced a piece.
pub(crate) fn dispatch_on_move(
    board: &mut Board,
    id: PieceId,
    event: MoveEvent,
    arrived_on_occupied: bool,
) {
    // Hooks re-borrow the board mutably, so work from a copy of the kind.
    match board.piece(id).kind.clone() {
        Kind::Pawn { .. } => pawn::on_move(board, id, event, arrived_on_occupied),
        Kind::King { .. } => king::on_move(board, id, event),
        Kind::Rook { .. } => {
            if event.from.is_some()
                && let Kind::Rook { has_moved } = &mut board.piece_mut(id).kind
            {
                *has_moved = true;
            }
        }
        Kind::Custom(custom) => {
            if let Some(on_move) = custom.on_move {
                on_move(board, id, event);
            }
        }
        Kind::Knight | Kind::Bishop | Kind::Queen => {}
    }
}
