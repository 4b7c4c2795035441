//! King-attack detection and the self-check filter.
//!
//! Both are pure functions of a `Board`. `would_be_in_check` simulates on a
//! copy, so the caller's board is unchanged on every path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_shared::{piece_reaches, MoveGeometry};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// `color`'s king is reachable by some opposing piece. A board without that
/// king is never in check.
#[inline]
pub fn king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Any piece of `attacker_color` could move onto `square` by its shape and
/// clearance rule. Turn ownership is ignored.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board.pieces(attacker_color).any(|(from, kind)| {
        from != square
            && piece_reaches(
                board,
                Piece::new(attacker_color, kind),
                &MoveGeometry::new(from, square),
            )
    })
}

/// `color`'s king would be attacked after playing `from -> to`.
pub fn would_be_in_check(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let mut scratch = *board;
    apply_move_unchecked(&mut scratch, from, to);
    king_in_check(&scratch, color)
}
