//! Static board evaluation.
//!
//! Scores are signed from White's point of view: material plus a
//! piece-square bonus for pawns, knights and bishops. The tables are laid
//! out from White's side, so White pieces look up `63 - square` and Black
//! pieces look up `square`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::in_range;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective.
    fn score(&self, board: &Board) -> i32;
}

#[rustfmt::skip]
pub const PAWN_TABLE: [i32; 64] = [
     0,  0,   0,   0,   0,   0,  0,  0,
    50, 50,  50,  50,  50,  50, 50, 50,
    10, 10,  20,  30,  30,  20, 10, 10,
     5,  5,  10,  25,  25,  10,  5,  5,
     0,  0,   0,  20,  20,   0,  0,  0,
     5, -5, -10,   0,   0, -10, -5,  5,
     5, 10,  10, -20, -20,  10, 10,  5,
     0,  0,   0,   0,   0,   0,  0,  0,
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
pub const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

/// Positional bonus for `kind` of `color` standing on `square`. Rooks,
/// queens and kings have no table, and squares off the board score zero.
#[inline]
pub fn position_bonus(kind: PieceKind, color: Color, square: Square) -> i32 {
    if !in_range(square) {
        return 0;
    }
    let index = match color {
        Color::White => 63 - square as usize,
        Color::Black => square as usize,
    };
    match kind {
        PieceKind::Pawn => PAWN_TABLE[index],
        PieceKind::Knight => KNIGHT_TABLE[index],
        PieceKind::Bishop => BISHOP_TABLE[index],
        PieceKind::Rook | PieceKind::Queen | PieceKind::King => 0,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, board: &Board) -> i32 {
        static_score(board)
    }
}

pub fn static_score(board: &Board) -> i32 {
    board
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(sq, cell)| cell.occupant().map(|p| (sq as Square, p)))
        .map(|(sq, piece)| {
            let total = piece.kind.value() + position_bonus(piece.kind, piece.color, sq);
            match piece.color {
                Color::White => total,
                Color::Black => -total,
            }
        })
        .sum()
}
