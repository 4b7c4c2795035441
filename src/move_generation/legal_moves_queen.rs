//! Queen shape rule: rook or bishop lines, same clearance rule.

use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::{is_path_clear, MoveGeometry};
use crate::move_generation::legal_moves_bishop::is_diagonal;
use crate::move_generation::legal_moves_rook::is_straight_line;

pub fn queen_move_shape(board: &Board, geometry: &MoveGeometry) -> bool {
    (is_straight_line(geometry) || is_diagonal(geometry)) && is_path_clear(board, geometry)
}
