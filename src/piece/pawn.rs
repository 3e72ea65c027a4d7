use log::debug;

use crate::board::{Board, MoveEvent, PieceId};
use crate::coord::Coord;
use crate::piece::{Color, Kind, Piece};

/// Candidate destinations for a pawn standing at `from`.
pub(crate) fn moves(board: &Board, from: Coord, color: Color, has_moved: bool) -> Vec<Coord> {
    let mut out = Vec::new();
    straight_moves(board, from, color, has_moved, &mut out);
    capturing_moves(board, from, color, &mut out);
    out
}

fn straight_moves(
    board: &Board,
    from: Coord,
    color: Color,
    has_moved: bool,
    out: &mut Vec<Coord>,
) {
    let reach = if has_moved { 1 } else { 2 };
    for step in 1..=reach {
        let Some(to) = from.offset(0, step * color.forward()) else {
            break;
        };
        // Any occupant ends the advance; a pawn cannot step past a blocker.
        if board.piece_at(to).is_some() {
            break;
        }
        out.push(to);
    }
}

fn capturing_moves(board: &Board, from: Coord, color: Color, out: &mut Vec<Coord>) {
    for df in [-1, 1] {
        let Some(to) = from.offset(df, color.forward()) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != color => out.push(to),
            // A same-color occupant is simply not a capture.
            Some(_) => {}
            None => {
                // En passant: the bypassed pawn stands beside the origin,
                // on the target's file.
                if let Some(beside) = from.offset(df, 0)
                    && let Some(neighbor) = board.piece_at(beside)
                    && neighbor.color != color
                    && matches!(neighbor.kind, Kind::Pawn { just_moved_double: true, .. })
                {
                    out.push(to);
                }
            }
        }
    }
}

/// Post-move hook: advance flags, en-passant execution, promotion.
///
/// `arrived_on_occupied` reports whether the placement displaced a piece;
/// a diagonal shift onto an occupied square was an ordinary capture, not
/// en passant.
pub(crate) fn on_move(board: &mut Board, id: PieceId, event: MoveEvent, arrived_on_occupied: bool) {
    let color = board.piece(id).color;

    if let Some(from) = event.from {
        let dr = (event.to.rank() as i8 - from.rank() as i8).abs();
        if let Kind::Pawn {
            has_moved,
            just_moved_double,
        } = &mut board.piece_mut(id).kind
        {
            *has_moved = true;
            // The en-passant window opens on a double advance and closes on
            // any other move of this pawn.
            *just_moved_double = dr == 2;
        }

        // A one-file shift onto an empty square passed beside the pawn it
        // captured en passant.
        let df = (event.to.file() as i8 - from.file() as i8).abs();
        if df == 1
            && !arrived_on_occupied
            && let Some(beside) = event.to.offset(0, from.rank() as i8 - event.to.rank() as i8)
            && let Some(victim) = board.piece_at(beside)
            && victim.color != color
            && matches!(victim.kind, Kind::Pawn { just_moved_double: true, .. })
        {
            debug!("en passant: removing the pawn on {beside}");
            board.remove(beside);
        }
    }

    // Promotion applies to any arrival on the far rank, in play or not.
    let far_rank = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    if event.to.rank() == far_rank {
        debug!("promoting the pawn on {}", event.to);
        let queen = board.add_piece(Piece::queen(color));
        board.place(queen, event.to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sq(s: &str) -> Coord {
        s.parse().expect("test square is valid")
    }

    fn place_pawn(board: &mut Board, color: Color, at: &str) -> PieceId {
        let id = board.add_piece(Piece::pawn(color));
        board.place(id, sq(at));
        id
    }

    #[test]
    fn test_unmoved_pawn_advances_one_or_two() {
        let mut board = Board::new();
        place_pawn(&mut board, Color::White, "d2");

        let candidates = moves(&board, sq("d2"), Color::White, false);

        assert_eq!(candidates, vec![sq("d3"), sq("d4")]);
    }

    #[test]
    fn test_moved_pawn_advances_at_most_one() {
        let mut board = Board::new();
        let pawn = place_pawn(&mut board, Color::White, "d2");
        board.place(pawn, sq("d3"));

        assert!(matches!(
            board.piece(pawn).kind,
            Kind::Pawn { has_moved: true, .. }
        ));
        let candidates = moves(&board, sq("d3"), Color::White, true);
        assert_eq!(candidates, vec![sq("d4")]);
    }

    #[test]
    fn test_black_pawn_advances_toward_rank_one() {
        let mut board = Board::new();
        place_pawn(&mut board, Color::Black, "d7");

        let candidates = moves(&board, sq("d7"), Color::Black, false);

        assert_eq!(candidates, vec![sq("d6"), sq("d5")]);
    }

    #[test_case(Color::White; "enemy blocker")]
    #[test_case(Color::Black; "own blocker")]
    fn test_any_blocker_directly_ahead_stops_the_advance(blocker: Color) {
        let mut board = Board::new();
        place_pawn(&mut board, Color::Black, "d7");
        place_pawn(&mut board, blocker, "d6");

        let candidates = moves(&board, sq("d7"), Color::Black, false);

        assert!(candidates.is_empty());
    }

    #[test]
    fn test_blocker_on_the_second_square_truncates_the_advance() {
        let mut board = Board::new();
        place_pawn(&mut board, Color::White, "d2");
        place_pawn(&mut board, Color::Black, "d4");

        let candidates = moves(&board, sq("d2"), Color::White, false);

        assert_eq!(candidates, vec![sq("d3")], "the blocker is not skipped past");
    }

    #[test]
    fn test_diagonal_capture_of_opposing_piece() {
        let mut board = Board::new();
        place_pawn(&mut board, Color::White, "d4");
        place_pawn(&mut board, Color::Black, "e5");

        let candidates = moves(&board, sq("d4"), Color::White, true);

        assert!(candidates.contains(&sq("e5")));
        assert!(!candidates.contains(&sq("c5")), "empty diagonal is no capture");
    }

    #[test]
    fn test_same_color_diagonal_is_silently_skipped() {
        let mut board = Board::new();
        place_pawn(&mut board, Color::White, "d4");
        place_pawn(&mut board, Color::White, "e5");

        let candidates = moves(&board, sq("d4"), Color::White, true);

        assert!(!candidates.contains(&sq("e5")));
    }

    #[test]
    fn test_en_passant_candidate_after_adjacent_double_advance() {
        let mut board = Board::new();
        place_pawn(&mut board, Color::White, "d5");
        let enemy = place_pawn(&mut board, Color::Black, "e7");
        board.place(enemy, sq("e5"));

        assert!(matches!(
            board.piece(enemy).kind,
            Kind::Pawn { just_moved_double: true, .. }
        ));
        let candidates = moves(&board, sq("d5"), Color::White, true);
        assert!(candidates.contains(&sq("e6")));
    }

    #[test]
    fn test_no_en_passant_without_the_double_advance_window() {
        let mut board = Board::new();
        place_pawn(&mut board, Color::White, "d5");
        let enemy = place_pawn(&mut board, Color::Black, "e6");
        board.place(enemy, sq("e5"));

        let candidates = moves(&board, sq("d5"), Color::White, true);

        assert!(!candidates.contains(&sq("e6")));
    }

    #[test]
    fn test_no_en_passant_against_a_non_pawn() {
        let mut board = Board::new();
        place_pawn(&mut board, Color::White, "d5");
        let rook = board.add_piece(Piece::rook(Color::Black));
        board.place(rook, sq("e5"));

        let candidates = moves(&board, sq("d5"), Color::White, true);

        assert!(!candidates.contains(&sq("e6")));
    }

    #[test]
    fn test_direct_placement_does_not_set_flags() {
        let mut board = Board::new();
        let pawn = place_pawn(&mut board, Color::White, "d4");

        assert!(matches!(
            board.piece(pawn).kind,
            Kind::Pawn {
                has_moved: false,
                just_moved_double: false,
            }
        ));
    }

    #[test]
    fn test_window_closes_after_a_single_advance() {
        let mut board = Board::new();
        let pawn = place_pawn(&mut board, Color::White, "d2");
        board.place(pawn, sq("d4"));
        board.place(pawn, sq("d5"));

        assert!(matches!(
            board.piece(pawn).kind,
            Kind::Pawn { just_moved_double: false, .. }
        ));
    }

    #[test]
    fn test_en_passant_execution_removes_the_bypassed_pawn() {
        let mut board = Board::new();
        let white = place_pawn(&mut board, Color::White, "d5");
        let black = place_pawn(&mut board, Color::Black, "e7");
        board.place(black, sq("e5"));

        board.place(white, sq("e6"));

        assert_eq!(board.coord_of(white), Some(sq("e6")));
        assert!(board.piece_at(sq("e5")).is_none(), "bypassed pawn is gone");
        assert_eq!(board.coord_of(black), None);
    }

    #[test]
    fn test_plain_diagonal_capture_leaves_neighbors_alone() {
        let mut board = Board::new();
        let white = place_pawn(&mut board, Color::White, "d4");
        place_pawn(&mut board, Color::Black, "e5");

        board.place(white, sq("e5"));

        assert_eq!(board.coord_of(white), Some(sq("e5")));
        assert_eq!(board.all_pieces().count(), 1, "only the captured pawn left the board");
    }

    #[test]
    fn test_ordinary_capture_does_not_double_capture_beside_it() {
        let mut board = Board::new();
        let white = place_pawn(&mut board, Color::White, "d5");
        let bystander = place_pawn(&mut board, Color::Black, "e7");
        board.place(bystander, sq("e5"));
        let target = board.add_piece(Piece::rook(Color::Black));
        board.place(target, sq("e6"));

        // Capturing the rook is an ordinary capture even though the e5 pawn
        // still has its en-passant window open.
        board.place(white, sq("e6"));

        assert_eq!(board.coord_of(white), Some(sq("e6")));
        assert_eq!(board.coord_of(bystander), Some(sq("e5")), "bystander pawn stays");
    }

    #[test]
    fn test_promotion_replaces_the_pawn_with_a_queen() {
        let mut board = Board::new();
        let pawn = place_pawn(&mut board, Color::White, "b7");

        board.place(pawn, sq("b8"));

        let promoted = board.piece_at(sq("b8")).expect("square is occupied");
        assert!(matches!(promoted.kind, Kind::Queen));
        assert_eq!(promoted.color, Color::White);
        assert_eq!(board.coord_of(pawn), None, "the pawn itself is off the board");
    }

    #[test]
    fn test_black_promotes_on_rank_one() {
        let mut board = Board::new();
        let pawn = place_pawn(&mut board, Color::Black, "g2");

        board.place(pawn, sq("g1"));

        let promoted = board.piece_at(sq("g1")).expect("square is occupied");
        assert!(matches!(promoted.kind, Kind::Queen));
        assert_eq!(promoted.color, Color::Black);
    }

    #[test]
    fn test_direct_placement_on_the_far_rank_promotes() {
        let mut board = Board::new();
        place_pawn(&mut board, Color::White, "c8");

        let piece = board.piece_at(sq("c8")).expect("square is occupied");
        assert!(matches!(piece.kind, Kind::Queen));
    }
}
