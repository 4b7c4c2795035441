//! Knight shape rule. Knights jump, so intervening pieces never block them.

use crate::move_generation::legal_move_shared::MoveGeometry;

#[inline]
pub fn knight_move_shape(geometry: &MoveGeometry) -> bool {
    let rows = geometry.row_delta().abs();
    let cols = geometry.col_delta().abs();
    (rows == 2 && cols == 1) || (rows == 1 && cols == 2)
}
