//! Quick heuristic ranking of a single candidate move.
//!
//! Independent of the full static score: rewards captures (more when the
//! capturing piece is cheaper than its target), central destinations and
//! pawn advancement, and discourages king walks.

use crate::game_state::board::{row_of, Board};
use crate::game_state::chess_rules::CENTER_SQUARES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::in_range;

pub const CHEAP_CAPTURE_BONUS: i32 = 50;
pub const CENTER_BONUS: i32 = 20;
pub const KING_MOVE_PENALTY: i32 = 30;
pub const PAWN_ADVANCE_PER_ROW: i32 = 5;

/// Score of `mv` for the piece on `mv.from`. Moves with an endpoint off the
/// board, or from an empty square, score zero.
pub fn move_score(board: &Board, mv: Move) -> i32 {
    if !in_range(mv.from) || !in_range(mv.to) {
        return 0;
    }
    let Some(mover) = board.cell(mv.from).occupant() else {
        return 0;
    };
    let mut score = 0;

    if let Some(target) = board.cell(mv.to).piece() {
        score += target.value();
        if mover.kind.value() < target.value() {
            score += CHEAP_CAPTURE_BONUS;
        }
    }

    if CENTER_SQUARES.contains(&mv.to) {
        score += CENTER_BONUS;
    }

    match mover.kind {
        PieceKind::King => score -= KING_MOVE_PENALTY,
        PieceKind::Pawn => {
            let rows_from_home_edge = match mover.color {
                Color::Black => row_of(mv.to),
                Color::White => 7 - row_of(mv.to),
            };
            score += PAWN_ADVANCE_PER_ROW * rows_from_home_edge as i32;
        }
        _ => {}
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheap_capture_earns_bonus() {
        let mut board = Board::empty();
        board.place(42, Color::White, PieceKind::Knight).expect("empty");
        board.place(25, Color::Black, PieceKind::Rook).expect("empty");
        board.place(27, Color::Black, PieceKind::Pawn).expect("empty");

        assert_eq!(move_score(&board, Move::new(42, 25)), 500 + 50);
        // Knight takes pawn on a center square: no cheap-capture bonus.
        assert_eq!(move_score(&board, Move::new(42, 27)), 100 + 20);
    }

    #[test]
    fn king_moves_are_discouraged() {
        let mut board = Board::empty();
        board.place(60, Color::White, PieceKind::King).expect("empty");
        assert_eq!(move_score(&board, Move::new(60, 52)), -30);
    }

    #[test]
    fn pawn_advancement_counts_rows_from_own_edge() {
        let board = Board::starting_position();
        // Black e7-e5 lands on row 3 and a center square.
        assert_eq!(move_score(&board, Move::new(12, 28)), 15 + 20);
        // White a2-a3 lands on row 5, two rows from White's edge.
        assert_eq!(move_score(&board, Move::new(48, 40)), 10);
    }

    #[test]
    fn off_board_endpoints_score_zero() {
        let board = Board::starting_position();
        assert_eq!(move_score(&board, Move::new(12, 70)), 0);
        assert_eq!(move_score(&board, Move::new(64, 12)), 0);
    }
}
