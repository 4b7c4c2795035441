//! Move executor.
//!
//! Moves a piece record between cells, discards any captured piece, keeps
//! the king cache in step and reports whether the move reached a promotion
//! square. Validation is the caller's job.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::{row_of, Board};
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::in_range;

/// What happened on the board when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// Set when a pawn landed on the opponent's back rank.
    pub promotion_square: Option<Square>,
}

/// Raw cell transfer used by simulations. Returns the captured piece, if any.
/// Out-of-range or null moves leave the board untouched.
pub fn apply_move_unchecked(board: &mut Board, from: Square, to: Square) -> Option<Piece> {
    if from == to || !in_range(from) || !in_range(to) {
        return None;
    }
    let moving = board.cell(from);
    let captured = board.cell(to).occupant();
    board.put(to, moving);
    board.put(from, Cell::EMPTY);
    captured
}

/// Apply a validated move.
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> ChessResult<AppliedMove> {
    let moved = board
        .cell(from)
        .occupant()
        .ok_or(ChessErrors::IllegalShape { from, to })?;

    let captured = apply_move_unchecked(board, from, to);

    let promotion_square = (moved.kind == PieceKind::Pawn
        && row_of(to) == promotion_row(moved.color))
    .then_some(to);

    Ok(AppliedMove {
        mv: Move::new(from, to),
        moved,
        captured,
        promotion_square,
    })
}

/// Rewrite the pawn on `square` as `kind`, keeping its color.
pub fn promote_in_place(board: &mut Board, square: Square, kind: PieceKind) -> ChessResult<()> {
    if !kind.is_promotion_target() {
        return Err(ChessErrors::InvalidPromotionPiece(kind));
    }
    let pawn = board
        .cell(square)
        .occupant()
        .filter(|p| p.kind == PieceKind::Pawn)
        .ok_or(ChessErrors::NoPendingPromotion(square))?;
    board.put(square, Cell::occupied(pawn.color, kind));
    Ok(())
}
