//! Shared legality plumbing: admissibility, path clearance and the per-piece
//! shape dispatch used by both move attempts and attack detection.

use crate::game_state::board::{col_of, row_of, Board, SQUARE_COUNT};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::bishop_move_shape;
use crate::move_generation::legal_moves_king::king_move_shape;
use crate::move_generation::legal_moves_knight::knight_move_shape;
use crate::move_generation::legal_moves_pawn::pawn_move_shape;
use crate::move_generation::legal_moves_queen::queen_move_shape;
use crate::move_generation::legal_moves_rook::rook_move_shape;

/// Endpoints of a candidate move, pre-split into rows and columns.
#[derive(Debug, Clone, Copy)]
pub struct MoveGeometry {
    pub from: Square,
    pub to: Square,
    pub from_row: i8,
    pub from_col: i8,
    pub to_row: i8,
    pub to_col: i8,
}

impl MoveGeometry {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            from_row: row_of(from),
            from_col: col_of(from),
            to_row: row_of(to),
            to_col: col_of(to),
        }
    }

    #[inline]
    pub const fn row_delta(&self) -> i8 {
        self.to_row - self.from_row
    }

    #[inline]
    pub const fn col_delta(&self) -> i8 {
        self.to_col - self.from_col
    }
}

#[inline]
pub fn in_range(square: Square) -> bool {
    (square as usize) < SQUARE_COUNT
}

/// Every square strictly between `from` and `to` is empty. Only meaningful
/// for straight or diagonal lines; the destination is not inspected.
pub fn is_path_clear(board: &Board, geometry: &MoveGeometry) -> bool {
    let row_step = geometry.row_delta().signum();
    let col_step = geometry.col_delta().signum();

    let mut row = geometry.from_row + row_step;
    let mut col = geometry.from_col + col_step;
    while row != geometry.to_row || col != geometry.to_col {
        if !board.is_empty((row * 8 + col) as Square) {
            return false;
        }
        row += row_step;
        col += col_step;
    }
    true
}

/// Shape + clearance rule for the piece standing on `from`, ignoring whose
/// turn it is and what stands on `to`.
pub fn piece_reaches(board: &Board, piece: Piece, geometry: &MoveGeometry) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_move_shape(board, piece.color, geometry),
        PieceKind::Knight => knight_move_shape(geometry),
        PieceKind::Bishop => bishop_move_shape(board, geometry),
        PieceKind::Rook => rook_move_shape(board, geometry),
        PieceKind::Queen => queen_move_shape(board, geometry),
        PieceKind::King => king_move_shape(geometry),
    }
}

/// Admissibility + shape rule for `color` moving `from -> to`. Does not
/// consider whether the move leaves `color`'s king attacked.
pub fn is_legal_move_for(board: &Board, color: Color, from: Square, to: Square) -> bool {
    if !in_range(from) || !in_range(to) || from == to {
        return false;
    }

    let Some(mover) = board.cell(from).occupant() else {
        return false;
    };
    if mover.color != color || board.cell(to).holds(color) {
        return false;
    }

    piece_reaches(board, mover, &MoveGeometry::new(from, to))
}

/// Shape legality for the side to move of `game_state`.
#[inline]
pub fn is_legal_move(game_state: &GameState, from: Square, to: Square) -> bool {
    is_legal_move_for(&game_state.board, game_state.turn, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friendly_capture_and_null_move_are_rejected() {
        let board = Board::starting_position();
        // Black rook a8 onto its own knight b8.
        assert!(!is_legal_move_for(&board, Color::Black, 0, 1));
        assert!(!is_legal_move_for(&board, Color::Black, 8, 8));
        // Wrong color on the source square.
        assert!(!is_legal_move_for(&board, Color::White, 8, 16));
        // Empty source square.
        assert!(!is_legal_move_for(&board, Color::Black, 20, 28));
        assert!(!is_legal_move_for(&board, Color::Black, 8, 64));
    }

    #[test]
    fn path_clearance_ignores_endpoints() {
        let mut board = Board::empty();
        board.place(0, Color::Black, PieceKind::Rook).expect("empty");
        board.place(7, Color::White, PieceKind::Rook).expect("empty");
        assert!(is_path_clear(&board, &MoveGeometry::new(0, 7)));

        board.place(4, Color::White, PieceKind::Pawn).expect("empty");
        assert!(!is_path_clear(&board, &MoveGeometry::new(0, 7)));
        assert!(is_path_clear(&board, &MoveGeometry::new(0, 4)));
    }
}
