//! Game session state and the turn state machine.
//!
//! `GameState` is the single owned aggregate for one game: board, check
//! flags, whose turn it is, pause/game-over flags and any unresolved
//! promotion. All mutation goes through `attempt_move`, `resolve_promotion`
//! and `play_bot_turn`, which reject requests while the game is over, paused
//! or waiting on a promotion choice.

use tracing::{debug, info};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::board::{checked_square, Board};
use crate::game_state::chess_types::*;
use crate::game_state::game_config::{Difficulty, GameConfig, GameMode};
use crate::game_state::game_outcome::{classify_position, GameEvent, GameStatus};
use crate::move_generation::legal_move_apply::{apply_move, promote_in_place, AppliedMove};
use crate::move_generation::legal_move_checks::{king_in_check, would_be_in_check};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::legal_move_shared::is_legal_move;

/// Successful result of `attempt_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move completed; `status` describes the position for the new side
    /// to move (or the final result).
    Applied {
        applied: AppliedMove,
        status: GameStatus,
    },
    /// A pawn reached the last rank. The turn stays with the mover until
    /// `resolve_promotion` is called.
    PendingPromotion { applied: AppliedMove, square: Square },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub check_status: CheckStatus,
    pub turn: Color,
    pub game_over: bool,
    pub paused: bool,
    pub pending_promotion: Option<Square>,
    pub outcome: Option<GameStatus>,
    pub config: GameConfig,
    pub move_count: u32,
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game(GameMode::default(), Difficulty::default())
    }
}

impl GameState {
    /// Fresh standard layout, Black to move.
    pub fn new_game(mode: GameMode, difficulty: Difficulty) -> Self {
        Self::from_board(
            Board::starting_position(),
            Color::Black,
            GameConfig::new(mode, difficulty),
        )
    }

    /// Start from an arbitrary position. Check flags are derived from the
    /// board; the game is not classified until the first move completes.
    pub fn from_board(board: Board, turn: Color, config: GameConfig) -> Self {
        let mut state = Self {
            board,
            check_status: CheckStatus::default(),
            turn,
            game_over: false,
            paused: false,
            pending_promotion: None,
            outcome: None,
            config,
            move_count: 0,
            events: Vec::new(),
        };
        state.refresh_check_status();
        state
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.check_status.get(color)
    }

    #[inline]
    pub fn is_bot_turn(&self) -> bool {
        self.config.mode.bot_controls(self.turn)
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_accepting_moves(&self) -> ChessResult<()> {
        if self.game_over {
            return Err(ChessErrors::GameOver);
        }
        if self.paused {
            return Err(ChessErrors::GamePaused);
        }
        if let Some(square) = self.pending_promotion {
            return Err(ChessErrors::PendingPromotionBlocksMove(square));
        }
        Ok(())
    }

    /// Validate and play `from -> to` for the side to move.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        let from = checked_square(from as i32)?;
        let to = checked_square(to as i32)?;
        self.ensure_accepting_moves()?;

        if !is_legal_move(self, from, to) {
            self.events.push(GameEvent::InvalidMove { from, to });
            return Err(ChessErrors::IllegalShape { from, to });
        }
        if would_be_in_check(&self.board, from, to, self.turn) {
            self.events.push(GameEvent::SelfCheckRejected { from, to });
            return Err(ChessErrors::SelfCheck { from, to });
        }

        let applied = apply_move(&mut self.board, from, to)?;
        self.move_count += 1;
        debug!(
            color = self.turn.name(),
            piece = applied.moved.kind.name(),
            from,
            to,
            captured = ?applied.captured.map(|p| p.kind),
            "move applied"
        );
        self.events.push(GameEvent::MoveApplied {
            mv: applied.mv,
            moved: applied.moved,
            captured: applied.captured,
        });

        if let Some(square) = applied.promotion_square {
            self.pending_promotion = Some(square);
            self.events.push(GameEvent::PromotionPending {
                square,
                color: self.turn,
            });
            return Ok(MoveOutcome::PendingPromotion { applied, square });
        }

        let status = self.finish_turn();
        Ok(MoveOutcome::Applied { applied, status })
    }

    /// Replace the pawn waiting on `square` and complete the turn.
    pub fn resolve_promotion(
        &mut self,
        square: Square,
        kind: PieceKind,
    ) -> ChessResult<GameStatus> {
        if self.pending_promotion != Some(square) {
            return Err(ChessErrors::NoPendingPromotion(square));
        }
        promote_in_place(&mut self.board, square, kind)?;
        self.pending_promotion = None;
        debug!(square, piece = kind.name(), "promotion resolved");
        self.events.push(GameEvent::PromotionResolved { square, kind });
        Ok(self.finish_turn())
    }

    /// Let `engine` choose and play a move for the side to move. A promotion
    /// reached by the bot is resolved to a queen.
    ///
    /// The engine plays at its own difficulty; `config.difficulty` only
    /// drives front-end pacing. Bot-vs-bot matches rely on this to give each
    /// color a different strength.
    pub fn play_bot_turn(&mut self, engine: &mut dyn Engine) -> ChessResult<MoveOutcome> {
        self.ensure_accepting_moves()?;
        let color = self.turn;
        self.events.push(GameEvent::BotThinking(color));

        let Some(mv) = engine.choose_move(self)?.best_move else {
            self.events.push(GameEvent::NoValidMoves(color));
            return Err(ChessErrors::NoLegalMoves(color));
        };

        match self.attempt_move(mv.from, mv.to)? {
            MoveOutcome::PendingPromotion { applied, square } => {
                let status = self.resolve_promotion(square, PieceKind::Queen)?;
                Ok(MoveOutcome::Applied { applied, status })
            }
            applied => Ok(applied),
        }
    }

    pub fn pause(&mut self) -> ChessResult<()> {
        if self.game_over {
            return Err(ChessErrors::GameOver);
        }
        if !self.paused {
            self.paused = true;
            info!("game paused");
            self.events.push(GameEvent::Paused);
        }
        Ok(())
    }

    pub fn resume(&mut self) -> ChessResult<()> {
        if self.game_over {
            return Err(ChessErrors::GameOver);
        }
        if self.paused {
            self.paused = false;
            info!("game resumed");
            self.events.push(GameEvent::Resumed);
        }
        Ok(())
    }

    fn refresh_check_status(&mut self) {
        for color in [Color::White, Color::Black] {
            self.check_status.set(color, king_in_check(&self.board, color));
        }
    }

    /// Recompute checks, classify the position for the opponent and hand
    /// over the turn unless the game ended.
    fn finish_turn(&mut self) -> GameStatus {
        self.refresh_check_status();
        let next = self.turn.opposite();
        let status = classify_position(&LegalMoveGenerator, &self.board, next);

        match status {
            GameStatus::Checkmate { winner } => {
                info!(winner = winner.name(), moves = self.move_count, "checkmate");
                self.events.push(GameEvent::Checkmate { winner });
            }
            GameStatus::Stalemate => {
                info!(moves = self.move_count, "stalemate");
                self.events.push(GameEvent::Stalemate);
            }
            GameStatus::Check(color) => self.events.push(GameEvent::Check(color)),
            GameStatus::Ongoing => {}
        }

        if status.is_terminal() {
            self.game_over = true;
            self.outcome = Some(status);
        } else {
            self.turn = next;
        }
        status
    }
}

/// Free-function entry points mirroring the `GameState` methods.
pub fn new_game(mode: GameMode, difficulty: Difficulty) -> GameState {
    GameState::new_game(mode, difficulty)
}

pub fn attempt_move(state: &mut GameState, from: Square, to: Square) -> ChessResult<MoveOutcome> {
    state.attempt_move(from, to)
}

pub fn resolve_promotion(
    state: &mut GameState,
    square: Square,
    kind: PieceKind,
) -> ChessResult<GameStatus> {
    state.resolve_promotion(square, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_heuristic::HeuristicEngine;
    use crate::move_generation::legal_move_generator::enumerate_legal_moves;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square name")
    }

    fn play(state: &mut GameState, from: &str, to: &str) -> MoveOutcome {
        state
            .attempt_move(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{from}{to} should be legal: {e}"))
    }

    #[test]
    fn new_game_starts_with_black_to_move() {
        let state = new_game(GameMode::HumanVsBot, Difficulty::Hard);
        assert_eq!(state.current_turn(), Color::Black);
        assert!(!state.is_game_over());
        assert!(!state.is_in_check(Color::White));
        assert_eq!(state.config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn rejections_distinguish_shape_from_self_check() {
        let mut state = GameState::default();
        assert_eq!(
            state.attempt_move(sq("e7"), sq("e4")),
            Err(ChessErrors::IllegalShape {
                from: sq("e7"),
                to: sq("e4")
            })
        );
        assert_eq!(state.attempt_move(64, 0), Err(ChessErrors::OutOfBounds(64)));

        let mut board = Board::empty();
        board.place(sq("e8"), Color::Black, PieceKind::King).expect("empty");
        board.place(sq("e7"), Color::Black, PieceKind::Bishop).expect("empty");
        board.place(sq("e1"), Color::White, PieceKind::Rook).expect("empty");
        board.place(sq("a1"), Color::White, PieceKind::King).expect("empty");
        let mut pinned = GameState::from_board(board, Color::Black, GameConfig::default());
        let before = pinned.board;

        assert_eq!(
            pinned.attempt_move(sq("e7"), sq("d6")),
            Err(ChessErrors::SelfCheck {
                from: sq("e7"),
                to: sq("d6")
            })
        );
        assert_eq!(pinned.board, before);
        assert_eq!(pinned.current_turn(), Color::Black);
        assert_eq!(
            pinned.take_events(),
            vec![GameEvent::SelfCheckRejected {
                from: sq("e7"),
                to: sq("d6")
            }]
        );
    }

    #[test]
    fn turns_alternate_after_each_move() {
        let mut state = GameState::default();
        play(&mut state, "e7", "e5");
        assert_eq!(state.current_turn(), Color::White);
        assert_eq!(
            state.attempt_move(sq("d7"), sq("d5")),
            Err(ChessErrors::IllegalShape {
                from: sq("d7"),
                to: sq("d5")
            })
        );
        play(&mut state, "e2", "e4");
        assert_eq!(state.current_turn(), Color::Black);
        assert_eq!(state.move_count, 2);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        // Black moves first here, so the mating side is Black: White weakens
        // the f- and g-pawns and the black queen mates on h4.
        let mut state = GameState::default();
        play(&mut state, "e7", "e5");
        play(&mut state, "f2", "f3");
        play(&mut state, "a7", "a6");
        play(&mut state, "g2", "g4");
        let outcome = play(&mut state, "d8", "h4");

        let MoveOutcome::Applied { status, .. } = outcome else {
            panic!("queen move cannot promote");
        };
        assert_eq!(
            status,
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert!(state.is_game_over());
        assert!(state.is_in_check(Color::White));
        assert!(enumerate_legal_moves(&state.board, Color::White).is_empty());
        assert_eq!(state.attempt_move(sq("a2"), sq("a3")), Err(ChessErrors::GameOver));
        assert!(state
            .take_events()
            .contains(&GameEvent::Checkmate {
                winner: Color::Black
            }));
    }

    #[test]
    fn stalemate_ends_the_game_without_check() {
        let mut board = Board::empty();
        board.place(sq("a1"), Color::White, PieceKind::King).expect("empty");
        board.place(sq("d2"), Color::Black, PieceKind::Queen).expect("empty");
        board.place(sq("h8"), Color::Black, PieceKind::King).expect("empty");
        let mut state = GameState::from_board(board, Color::Black, GameConfig::default());

        let outcome = play(&mut state, "d2", "c2");
        assert!(matches!(
            outcome,
            MoveOutcome::Applied {
                status: GameStatus::Stalemate,
                ..
            }
        ));
        assert!(state.is_game_over());
        assert!(!state.is_in_check(Color::White));
        assert_eq!(state.outcome, Some(GameStatus::Stalemate));
    }

    #[test]
    fn check_advisory_does_not_end_the_game() {
        let mut state = GameState::default();
        play(&mut state, "e7", "e5");
        play(&mut state, "d2", "d4");
        let outcome = play(&mut state, "f8", "b4");
        assert!(matches!(
            outcome,
            MoveOutcome::Applied {
                status: GameStatus::Check(Color::White),
                ..
            }
        ));
        assert!(!state.is_game_over());
        assert!(state.is_in_check(Color::White));
        assert_eq!(state.current_turn(), Color::White);
    }

    #[test]
    fn promotion_blocks_the_turn_until_resolved() {
        let mut board = Board::empty();
        board.place(sq("c2"), Color::Black, PieceKind::Pawn).expect("empty");
        board.place(sq("h8"), Color::Black, PieceKind::King).expect("empty");
        board.place(sq("h1"), Color::White, PieceKind::King).expect("empty");
        let mut state = GameState::from_board(board, Color::Black, GameConfig::default());

        let outcome = play(&mut state, "c2", "c1");
        assert!(matches!(
            outcome,
            MoveOutcome::PendingPromotion { square, .. } if square == sq("c1")
        ));
        assert_eq!(state.current_turn(), Color::Black);
        assert_eq!(
            state.attempt_move(sq("h8"), sq("g8")),
            Err(ChessErrors::PendingPromotionBlocksMove(sq("c1")))
        );
        assert_eq!(
            state.resolve_promotion(sq("c1"), PieceKind::King),
            Err(ChessErrors::InvalidPromotionPiece(PieceKind::King))
        );
        assert_eq!(
            state.resolve_promotion(sq("d1"), PieceKind::Knight),
            Err(ChessErrors::NoPendingPromotion(sq("d1")))
        );

        let status = state
            .resolve_promotion(sq("c1"), PieceKind::Knight)
            .expect("pending promotion");
        assert_eq!(status, GameStatus::Ongoing);
        assert_eq!(state.board.cell(sq("c1")).piece(), Some(PieceKind::Knight));
        assert_eq!(state.current_turn(), Color::White);
    }

    #[test]
    fn promotion_to_a_checking_piece_runs_check_detection() {
        let mut board = Board::empty();
        board.place(sq("c2"), Color::Black, PieceKind::Pawn).expect("empty");
        board.place(sq("h8"), Color::Black, PieceKind::King).expect("empty");
        board.place(sq("h1"), Color::White, PieceKind::King).expect("empty");
        let mut state = GameState::from_board(board, Color::Black, GameConfig::default());

        play(&mut state, "c2", "c1");
        assert!(!state.is_in_check(Color::White));
        let status = state
            .resolve_promotion(sq("c1"), PieceKind::Rook)
            .expect("pending promotion");
        assert_eq!(status, GameStatus::Check(Color::White));
        assert!(state.is_in_check(Color::White));
    }

    #[test]
    fn pause_freezes_moves_without_touching_the_board() {
        let mut state = GameState::default();
        let before = state.board;
        state.pause().expect("game running");
        assert_eq!(state.attempt_move(sq("e7"), sq("e5")), Err(ChessErrors::GamePaused));
        assert_eq!(state.board, before);

        state.resume().expect("game running");
        play(&mut state, "e7", "e5");
        assert_eq!(
            state.take_events()[..2],
            [GameEvent::Paused, GameEvent::Resumed]
        );
    }

    #[test]
    fn bot_turn_plays_a_legal_move_and_promotes_to_queen() {
        let mut board = Board::empty();
        board.place(sq("c2"), Color::Black, PieceKind::Pawn).expect("empty");
        board.place(sq("a8"), Color::Black, PieceKind::King).expect("empty");
        board.place(sq("h4"), Color::White, PieceKind::King).expect("empty");
        let config = GameConfig::new(GameMode::BotVsBot, Difficulty::Hard);
        let mut state = GameState::from_board(board, Color::Black, config);
        let mut engine = HeuristicEngine::with_seed(Difficulty::Hard, 7);

        assert!(state.is_bot_turn());
        state.play_bot_turn(&mut engine).expect("bot has moves");
        assert_eq!(state.board.cell(sq("c1")).piece(), Some(PieceKind::Queen));
        assert_eq!(state.pending_promotion, None);
        assert_eq!(state.current_turn(), Color::White);
    }

    #[test]
    fn bot_plays_at_the_engine_difficulty() {
        let state = GameState::new_game(GameMode::BotVsBot, Difficulty::Easy);
        let mut reference = HeuristicEngine::with_seed(Difficulty::Hard, 17);
        let expected = reference
            .choose_move(&state)
            .expect("engine never fails")
            .best_move
            .expect("opening has moves");

        let mut played = state.clone();
        let mut engine = HeuristicEngine::with_seed(Difficulty::Hard, 17);
        match played.play_bot_turn(&mut engine).expect("bot moves") {
            MoveOutcome::Applied { applied, .. } => assert_eq!(applied.mv, expected),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(played.config.difficulty, Difficulty::Easy);
    }
}
