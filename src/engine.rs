use log::debug;
use thiserror::Error;

use crate::board::{Board, MoveCandidate, PieceId};
use crate::coord::Coord;
use crate::piece::NoMoveRules;

/// Errors surfaced by the selection/execution protocol.
///
/// None of these are recoverable conditions; each one is a contract
/// violation made visible to the caller. The board always stays in its last
/// committed state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// One interaction resolved to more than one square: the input source
    /// is malformed.
    #[error("activation signal resolved {0} squares at once")]
    MultipleActivation(usize),
    /// A move generator broke its contract by listing the piece's own
    /// square.
    #[error("the move list for the piece on {0} contains its own square")]
    InvalidMoveList(Coord),
    #[error(transparent)]
    NoMoveRules(#[from] NoMoveRules),
}

/// What a single activation signal did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A pending candidate was committed.
    Committed {
        piece: PieceId,
        from: Option<Coord>,
        to: Coord,
    },
    /// A piece was selected and its candidates highlighted.
    Selected { piece: PieceId, candidates: usize },
    /// Nothing to commit and nothing to select.
    Idle,
}

/// The selection/execution protocol over one board.
///
/// Each external "square activated" signal moves the engine through one
/// transition: commit a pending candidate, highlight a piece's candidates,
/// or fall back to idle. Everything runs to completion synchronously; the
/// board is only ever mutated from within one signal at a time.
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    /// Engine over an empty board; callers set up pieces through
    /// [`Board::place`].
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Handles one interaction's worth of resolved squares.
    ///
    /// An empty hit set is an interaction that missed the board and is
    /// ignored. More than one hit means the input layer is broken.
    pub fn handle_signal(&mut self, hits: &[Coord]) -> Result<Outcome, EngineError> {
        match *hits {
            [] => Ok(Outcome::Idle),
            [coord] => self.activate(coord),
            _ => Err(EngineError::MultipleActivation(hits.len())),
        }
    }

    /// Processes the activation of exactly one square.
    pub fn activate(&mut self, at: Coord) -> Result<Outcome, EngineError> {
        let tile = self.board.tile_at(at);
        if let Some(candidate) = tile.candidate() {
            Ok(self.commit(candidate))
        } else if let Some(piece) = tile.occupant() {
            self.select(piece, at)
        } else {
            self.board.clear_highlights();
            Ok(Outcome::Idle)
        }
    }

    fn commit(&mut self, candidate: MoveCandidate) -> Outcome {
        // The origin has to be read before the placement mutates it.
        let from = self.board.coord_of(candidate.piece);
        self.board.place(candidate.piece, candidate.to);
        self.board.clear_highlights();
        debug!("committed a move to {}", candidate.to);
        Outcome::Committed {
            piece: candidate.piece,
            from,
            to: candidate.to,
        }
    }

    fn select(&mut self, piece: PieceId, at: Coord) -> Result<Outcome, EngineError> {
        self.board.clear_highlights();

        let moves = self.board.piece(piece).generate_moves(&self.board, at)?;
        if moves.contains(&at) {
            return Err(EngineError::InvalidMoveList(at));
        }

        let candidates = moves.len();
        for to in moves {
            self.board.set_candidate(to, MoveCandidate { piece, to });
        }
        debug!(
            "selected {} on {at}: {candidates} candidate(s)",
            self.board.piece(piece).glyph()
        );
        Ok(Outcome::Selected { piece, candidates })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
