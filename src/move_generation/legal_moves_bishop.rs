//! Bishop shape rule: equal row and column distance with a clear diagonal.

use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::{is_path_clear, MoveGeometry};

#[inline]
pub fn is_diagonal(geometry: &MoveGeometry) -> bool {
    geometry.row_delta().abs() == geometry.col_delta().abs()
}

pub fn bishop_move_shape(board: &Board, geometry: &MoveGeometry) -> bool {
    is_diagonal(geometry) && is_path_clear(board, geometry)
}
