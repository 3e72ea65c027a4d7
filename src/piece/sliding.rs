use crate::board::Board;
use crate::coord::Coord;
use crate::piece::Color;

/// Movement capabilities of a sliding piece.
///
/// Bishop, Rook, Queen and the King's one-step moves all share the same
/// outward walk; they differ only in which direction sets are enabled and
/// how far the walk reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    pub straight: bool,
    pub diagonal: bool,
    pub range: i8,
}

pub const QUEEN: Reach = Reach {
    straight: true,
    diagonal: true,
    range: 8,
};

pub const ROOK: Reach = Reach {
    straight: true,
    diagonal: false,
    range: 8,
};

pub const BISHOP: Reach = Reach {
    straight: false,
    diagonal: true,
    range: 8,
};

pub const KING: Reach = Reach {
    straight: true,
    diagonal: true,
    range: 1,
};

const STRAIGHT: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Candidate destinations for a sliding piece standing at `from`.
///
/// Each enabled direction is walked one step at a time up to `reach.range`
/// and abandoned as soon as it runs off-board or hits an occupied square;
/// an opposing occupant is included as the final candidate of its direction.
pub fn moves(board: &Board, from: Coord, color: Color, reach: Reach) -> Vec<Coord> {
    let mut out = Vec::new();
    if reach.straight {
        for dir in STRAIGHT {
            walk(board, from, color, dir, reach.range, &mut out);
        }
    }
    if reach.diagonal {
        for dir in DIAGONAL {
            walk(board, from, color, dir, reach.range, &mut out);
        }
    }
    out
}

fn walk(
    board: &Board,
    from: Coord,
    color: Color,
    (df, dr): (i8, i8),
    range: i8,
    out: &mut Vec<Coord>,
) {
    for step in 1..=range {
        let Some(to) = from.offset(df * step, dr * step) else {
            break;
        };
        match board.piece_at(to) {
            None => out.push(to),
            Some(blocker) => {
                if blocker.color != color {
                    out.push(to);
                }
                break;
            }
        }
    }
}
