//! End-of-game classification and the events a front end renders.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

/// Status of the side to move after a completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a way out.
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Classify the position for `to_move` by full legal-move enumeration.
/// Shape-legal moves that walk into check do not count.
pub fn classify_position<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    to_move: Color,
) -> GameStatus {
    let in_check = king_in_check(board, to_move);
    match (generator.has_legal_move(board, to_move), in_check) {
        (false, true) => GameStatus::Checkmate {
            winner: to_move.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(to_move),
        (true, false) => GameStatus::Ongoing,
    }
}

/// Notifications emitted by the turn state machine. `Display` renders the
/// message shown to players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied {
        mv: Move,
        moved: Piece,
        captured: Option<Piece>,
    },
    PromotionPending { square: Square, color: Color },
    PromotionResolved { square: Square, kind: PieceKind },
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
    InvalidMove { from: Square, to: Square },
    SelfCheckRejected { from: Square, to: Square },
    BotThinking(Color),
    NoValidMoves(Color),
    Paused,
    Resumed,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::MoveApplied { moved, .. } => {
                write!(f, "{} {} moved", moved.color.title(), moved.kind.name())
            }
            GameEvent::PromotionPending { color, .. } => {
                write!(f, "{} pawn promotes: choose a piece", color.title())
            }
            GameEvent::PromotionResolved { kind, .. } => {
                write!(f, "Pawn promoted to {}", kind.name())
            }
            GameEvent::Check(color) => write!(f, "{} king is in check!", color.title()),
            GameEvent::Checkmate { winner } => write!(f, "Checkmate! {} wins!", winner.title()),
            GameEvent::Stalemate => write!(f, "Stalemate! It's a draw!"),
            GameEvent::InvalidMove { .. } => write!(f, "Invalid move!"),
            GameEvent::SelfCheckRejected { .. } => write!(f, "Move would put king in check!"),
            GameEvent::BotThinking(color) => write!(f, "{} bot is thinking...", color.title()),
            GameEvent::NoValidMoves(color) => write!(f, "No valid moves for {}!", color.name()),
            GameEvent::Paused => write!(f, "Game paused"),
            GameEvent::Resumed => write!(f, "Game resumed"),
        }
    }
}
