use log::debug;

use crate::board::{Board, MoveEvent, PieceId};
use crate::coord::Coord;
use crate::piece::{Color, Kind, sliding};

/// Candidate destinations for a king standing at `from`.
///
/// One step in any direction, plus castling while the king is unmoved.
pub(crate) fn moves(board: &Board, from: Coord, color: Color, has_moved: bool) -> Vec<Coord> {
    let mut out = sliding::moves(board, from, color, sliding::KING);
    if !has_moved {
        castling_moves(board, from, color, &mut out);
    }
    out
}

/// Appends the castling destinations still available to an unmoved king.
///
/// A side qualifies when its corner holds a same-color rook that has never
/// moved and every square strictly between king and rook is empty.
fn castling_moves(board: &Board, from: Coord, color: Color, out: &mut Vec<Coord>) {
    'sides: for corner_file in [0u8, 7] {
        let corner = Coord::at(corner_file, from.rank());
        match board.piece_at(corner) {
            Some(rook)
                if rook.color == color
                    && matches!(rook.kind, Kind::Rook { has_moved: false }) => {}
            _ => continue,
        }

        let (lo, hi) = if corner_file < from.file() {
            (corner_file, from.file())
        } else {
            (from.file(), corner_file)
        };
        for file in lo + 1..hi {
            if board.piece_at(Coord::at(file, from.rank())).is_some() {
                continue 'sides;
            }
        }

        let target_file = if corner_file == 0 { 2 } else { 6 };
        out.push(Coord::at(target_file, from.rank()));
    }
}

/// Post-move hook: records the move and completes a castling move by
/// bringing the rook across.
pub(crate) fn on_move(board: &mut Board, id: PieceId, event: MoveEvent) {
    let Some(from) = event.from else {
        return;
    };

    if let Kind::King { has_moved } = &mut board.piece_mut(id).kind {
        *has_moved = true;
    }

    // Only castling shifts the king two files in one move.
    let df = event.to.file() as i8 - from.file() as i8;
    if df.abs() == 2 {
        let queenside = event.to.file() == 2;
        let rook_from = Coord::at(if queenside { 0 } else { 7 }, event.to.rank());
        let rook_to = Coord::at(if queenside { 3 } else { 5 }, event.to.rank());
        if let Some(rook) = board.piece_id_at(rook_from) {
            debug!("castling: moving the rook {rook_from} -> {rook_to}");
            board.place(rook, rook_to);
        }
    }
}
