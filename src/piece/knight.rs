use crate::board::Board;
use crate::coord::Coord;
use crate::piece::Color;

const OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Candidate destinations for a knight standing at `from`.
///
/// Offsets landing off-board or on a same-color piece are discarded.
pub(crate) fn moves(board: &Board, from: Coord, color: Color) -> Vec<Coord> {
    OFFSETS
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&to| board.piece_at(to).is_none_or(|piece| piece.color != color))
        .collect()
}
