//! Pawn shape rule.
//!
//! Pawns move one row toward the opponent onto an empty square, two rows
//! from their home row when both squares ahead are empty, and capture one
//! column sideways only onto an opposing piece. No en passant.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::MoveGeometry;

pub fn pawn_move_shape(board: &Board, color: Color, geometry: &MoveGeometry) -> bool {
    let direction = color.forward();
    let target = board.cell(geometry.to);

    if geometry.col_delta() == 0 {
        if geometry.row_delta() == direction {
            return target.is_empty();
        }
        if geometry.from_row == pawn_home_row(color) && geometry.row_delta() == 2 * direction {
            let skipped = (geometry.from_row + direction) * 8 + geometry.from_col;
            return target.is_empty() && board.is_empty(skipped as Square);
        }
        return false;
    }

    if geometry.col_delta().abs() == 1 && geometry.row_delta() == direction {
        return target.holds(color.opposite());
    }

    false
}
