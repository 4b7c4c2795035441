//! Full legal move enumeration.
//!
//! Scans every `(from, to)` pair for the pieces of one color, keeps the
//! shape-legal moves and filters out those that leave the mover's own king
//! attacked. Order is ascending `from`, then ascending `to`, so results are
//! reproducible.

use crate::game_state::board::{Board, SQUARE_COUNT};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::would_be_in_check;
use crate::move_generation::legal_move_shared::{in_range, is_legal_move_for};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        enumerate_legal_moves(board, color)
    }

    fn first_legal_moves(&self, board: &Board, color: Color, limit: usize) -> Vec<Move> {
        legal_moves_iter(board, color).take(limit).collect()
    }

    fn has_legal_move(&self, board: &Board, color: Color) -> bool {
        legal_moves_iter(board, color).next().is_some()
    }
}

/// `from -> to` passes both the shape rule and the self-check filter.
#[inline]
pub fn is_fully_legal(board: &Board, color: Color, from: Square, to: Square) -> bool {
    is_legal_move_for(board, color, from, to) && !would_be_in_check(board, from, to, color)
}

fn legal_moves_iter(board: &Board, color: Color) -> impl Iterator<Item = Move> + '_ {
    board.pieces(color).flat_map(move |(from, _)| {
        (0..SQUARE_COUNT as Square)
            .filter(move |&to| is_fully_legal(board, color, from, to))
            .map(move |to| Move::new(from, to))
    })
}

pub fn enumerate_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    legal_moves_iter(board, color).collect()
}

/// Legal destinations of the piece on `from`, for move highlighting.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    if !in_range(from) {
        return Vec::new();
    }
    let Some(color) = board.cell(from).color() else {
        return Vec::new();
    };
    (0..SQUARE_COUNT as Square)
        .filter(|&to| is_fully_legal(board, color, from, to))
        .collect()
}
