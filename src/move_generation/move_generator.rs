use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Source of fully legal (shape-legal and self-check-safe) moves.
pub trait MoveGenerator: Send + Sync {
    /// Legal moves for `color`, ordered by ascending source then destination.
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move>;

    /// At most the first `limit` legal moves, in the same order.
    fn first_legal_moves(&self, board: &Board, color: Color, limit: usize) -> Vec<Move> {
        let mut moves = self.generate_legal_moves(board, color);
        moves.truncate(limit);
        moves
    }

    fn has_legal_move(&self, board: &Board, color: Color) -> bool {
        !self.generate_legal_moves(board, color).is_empty()
    }
}
