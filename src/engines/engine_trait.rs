//! Engine abstraction used by the turn state machine and the match harness.
//!
//! Lets a front end drive any move-selection strategy behind one trait.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<Move>,
    pub best_score: Option<f64>,
    pub candidates_considered: usize,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose a move for the side to move in `game_state`.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
