//! King shape rule: one square in any direction. No castling.

use crate::move_generation::legal_move_shared::MoveGeometry;

#[inline]
pub fn king_move_shape(geometry: &MoveGeometry) -> bool {
    geometry.row_delta().abs() <= 1 && geometry.col_delta().abs() <= 1
}
