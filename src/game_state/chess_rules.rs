//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout and the rank numbers the pawn rules
//! depend on. This is the only hard-coded board state in the crate.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank piece order from column 0 to column 7, shared by both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Center squares rewarded by move scoring (d5, e5, d4, e4).
pub const CENTER_SQUARES: [u8; 4] = [27, 28, 35, 36];

#[inline]
pub const fn back_rank_row(color: Color) -> i8 {
    match color {
        Color::Black => 0,
        Color::White => 7,
    }
}

#[inline]
pub const fn pawn_home_row(color: Color) -> i8 {
    match color {
        Color::Black => 1,
        Color::White => 6,
    }
}

/// Row on which a pawn of `color` promotes (the opponent's back rank).
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    back_rank_row(color.opposite())
}
