//! Rook shape rule: same row or column with a clear path.

use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::{is_path_clear, MoveGeometry};

#[inline]
pub fn is_straight_line(geometry: &MoveGeometry) -> bool {
    geometry.from_row == geometry.to_row || geometry.from_col == geometry.to_col
}

pub fn rook_move_shape(board: &Board, geometry: &MoveGeometry) -> bool {
    is_straight_line(geometry) && is_path_clear(board, geometry)
}
