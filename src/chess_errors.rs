//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by the board model, the
//! legality engine, the turn state machine, and the terminal utilities.
//!
//! Usage guidelines:
//! - Move rejections (`IllegalShape`, `SelfCheck`) are ordinary outcomes of
//!   user input and carry the offending squares so a front end can report
//!   them precisely.
//! - State rejections (`GameOver`, `GamePaused`, `PendingPromotionBlocksMove`)
//!   mean the request was well formed but arrived at the wrong time.
//! - `NoLegalMoves` feeds the checkmate/stalemate classification upstream; it
//!   is only returned when a bot is asked to move in a finished position.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Square index outside `0..64` or row/column outside `0..8`.
    #[error("square out of bounds: {0}")]
    OutOfBounds(i32),

    /// The move fails the piece's movement or clearance rule, targets a
    /// friendly piece, does not move at all, or starts from a square that
    /// holds no piece of the side to move.
    #[error("illegal move from {from} to {to}")]
    IllegalShape { from: Square, to: Square },

    /// The move is shape-legal but leaves the mover's king attacked.
    #[error("move from {from} to {to} would leave the king in check")]
    SelfCheck { from: Square, to: Square },

    /// A pawn on the payload square is waiting for its promotion piece.
    #[error("a promotion on square {0} must be resolved first")]
    PendingPromotionBlocksMove(Square),

    #[error("no legal moves for {0}")]
    NoLegalMoves(Color),

    #[error("the game is over")]
    GameOver,

    #[error("the game is paused")]
    GamePaused,

    /// `resolve_promotion` was called for a square with no pending promotion.
    #[error("no promotion pending on square {0}")]
    NoPendingPromotion(Square),

    #[error("cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A configuration value (mode, difficulty, CLI flag) could not be parsed.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}
