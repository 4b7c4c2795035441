//! Difficulty-scaled heuristic opponent.
//!
//! Each legal move is ranked by `move_score`, optionally adjusted by a
//! one-ply look at the opponent's replies, then perturbed by uniform noise
//! whose width depends on the difficulty. The highest total wins; ties go to
//! the earliest move in enumeration order.
//!
//! The reply check is deliberately shallow: only the first `reply_sample`
//! replies in enumeration order are scored, and half of the worst of their
//! negated scores is added to the candidate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_config::Difficulty;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::move_scoring::move_score;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    pub lookahead: bool,
    pub reply_sample: usize,
    pub reply_weight: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            lookahead: true,
            reply_sample: 10,
            reply_weight: 0.5,
        }
    }
}

/// Deterministic part of a candidate's score: `move_score` plus the
/// weighted reply term when lookahead is enabled.
pub fn candidate_score<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    color: Color,
    mv: Move,
    config: &SelectorConfig,
) -> f64 {
    let mut score = move_score(board, mv) as f64;
    if !config.lookahead {
        return score;
    }

    let mut scratch = *board;
    apply_move_unchecked(&mut scratch, mv.from, mv.to);
    let worst_reply = generator
        .first_legal_moves(&scratch, color.opposite(), config.reply_sample)
        .into_iter()
        .map(|reply| -move_score(&scratch, reply))
        .min();

    if let Some(worst) = worst_reply {
        score += worst as f64 * config.reply_weight;
    }
    score
}

/// Pick a move for `color`, or `None` when it has no legal moves.
pub fn select_move_with_rng<G, R>(
    generator: &G,
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    config: &SelectorConfig,
    rng: &mut R,
) -> Option<(Move, f64, usize)>
where
    G: MoveGenerator + ?Sized,
    R: Rng + ?Sized,
{
    let candidates = generator.generate_legal_moves(board, color);
    let half_width = difficulty.randomness() as f64 / 2.0;

    let mut best: Option<(Move, f64)> = None;
    for &mv in &candidates {
        let base = candidate_score(generator, board, color, mv, config);
        let noise = if half_width > 0.0 {
            rng.random_range(-half_width..=half_width)
        } else {
            0.0
        };
        let total = base + noise;
        trace!(from = mv.from, to = mv.to, base, total, "candidate scored");

        if best.map_or(true, |(_, best_score)| total > best_score) {
            best = Some((mv, total));
        }
    }

    best.map(|(mv, score)| (mv, score, candidates.len()))
}

/// Convenience entry point using the thread-local RNG and default settings.
pub fn select_move(state: &GameState, color: Color, difficulty: Difficulty) -> Option<Move> {
    select_move_with_rng(
        &LegalMoveGenerator,
        &state.board,
        color,
        difficulty,
        &SelectorConfig::default(),
        &mut rand::rng(),
    )
    .map(|(mv, _, _)| mv)
}

pub struct HeuristicEngine {
    difficulty: Difficulty,
    config: SelectorConfig,
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl HeuristicEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Reproducible engine for tests and seeded match series.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            difficulty,
            config: SelectorConfig::default(),
            move_generator: LegalMoveGenerator,
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Engine for HeuristicEngine {
    fn name(&self) -> &str {
        "Heuristic one-ply"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let color = game_state.current_turn();
        let picked = select_move_with_rng(
            &self.move_generator,
            &game_state.board,
            color,
            self.difficulty,
            &self.config,
            &mut self.rng,
        );

        let Some((mv, score, considered)) = picked else {
            debug!(color = color.name(), "no legal moves to choose from");
            return Ok(EngineOutput::default());
        };

        debug!(
            color = color.name(),
            difficulty = %self.difficulty,
            from = mv.from,
            to = mv.to,
            score,
            considered,
            "bot move selected"
        );
        Ok(EngineOutput {
            best_move: Some(mv),
            best_score: Some(score),
            candidates_considered: considered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_config::GameConfig;

    /// Every draw is zero, so every candidate gets the same noise.
    struct ZeroRng;

    impl rand::RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    /// Black: king a8, rook d8. White: queen d3, king h1. Black to move.
    fn rook_can_take_queen() -> Board {
        let mut board = Board::empty();
        board.place(0, Color::Black, PieceKind::King).expect("empty");
        board.place(3, Color::Black, PieceKind::Rook).expect("empty");
        board.place(43, Color::White, PieceKind::Queen).expect("empty");
        board.place(63, Color::White, PieceKind::King).expect("empty");
        board
    }

    #[test]
    fn reply_term_uses_worst_of_first_replies() {
        let board = rook_can_take_queen();
        let config = SelectorConfig::default();

        let score = |mv: Move, config: &SelectorConfig| {
            candidate_score(&LegalMoveGenerator, &board, Color::Black, mv, config)
        };

        // Capture: 900 + 50, and White's three king replies score -30 each.
        assert_eq!(score(Move::new(3, 43), &config), 950.0 + 15.0);

        // Rook to d5 hangs it to the queen (500 + center 20).
        assert_eq!(score(Move::new(3, 27), &config), 20.0 - 260.0);

        let flat = SelectorConfig {
            lookahead: false,
            ..config
        };
        assert_eq!(score(Move::new(3, 27), &flat), 20.0);
    }

    #[test]
    fn hard_bot_takes_the_queen_almost_always() {
        let state =
            GameState::from_board(rook_can_take_queen(), Color::Black, GameConfig::default());
        let mut engine = HeuristicEngine::with_seed(Difficulty::Hard, 42);

        let captures = (0..1000)
            .filter(|_| {
                let out = engine.choose_move(&state).expect("engine never fails");
                out.best_move == Some(Move::new(3, 43))
            })
            .count();
        assert!(captures >= 900, "capture chosen {captures} times out of 1000");
    }

    #[test]
    fn no_legal_moves_yields_none() {
        // Black king a8 boxed in by a white queen on b6 without being in check.
        let mut board = Board::empty();
        board.place(0, Color::Black, PieceKind::King).expect("empty");
        board.place(17, Color::White, PieceKind::Queen).expect("empty");
        board.place(63, Color::White, PieceKind::King).expect("empty");
        let state = GameState::from_board(board, Color::Black, GameConfig::default());

        assert_eq!(select_move(&state, Color::Black, Difficulty::Easy), None);
        let mut engine = HeuristicEngine::with_seed(Difficulty::Easy, 1);
        let out = engine.choose_move(&state).expect("engine never fails");
        assert_eq!(out.best_move, None);
        assert_eq!(out.candidates_considered, 0);
    }

    #[test]
    fn selection_is_reproducible_for_a_fixed_seed() {
        let state = GameState::default();
        let mut a = HeuristicEngine::with_seed(Difficulty::Easy, 99);
        let mut b = HeuristicEngine::with_seed(Difficulty::Easy, 99);
        for _ in 0..5 {
            assert_eq!(
                a.choose_move(&state).expect("moves exist"),
                b.choose_move(&state).expect("moves exist")
            );
        }
    }

    #[test]
    fn noise_stays_within_half_the_difficulty_width() {
        let config = SelectorConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        for (board, color) in [
            (Board::starting_position(), Color::Black),
            (rook_can_take_queen(), Color::Black),
        ] {
            for difficulty in [Difficulty::Hard, Difficulty::Easy] {
                let half_width = difficulty.randomness() as f64 / 2.0;
                for _ in 0..200 {
                    let (mv, total, _) = select_move_with_rng(
                        &LegalMoveGenerator,
                        &board,
                        color,
                        difficulty,
                        &config,
                        &mut rng,
                    )
                    .expect("moves exist");
                    let base = candidate_score(&LegalMoveGenerator, &board, color, mv, &config);
                    assert!(
                        (total - base).abs() <= half_width,
                        "{difficulty}: total {total} strays from base {base}"
                    );
                }
            }
        }
    }

    #[test]
    fn equal_scores_go_to_the_first_candidate() {
        // Lone kings on a8 and h1: each Black king step scores -30 and every
        // White reply is another king step, so all three candidates tie.
        let mut board = Board::empty();
        board.place(0, Color::Black, PieceKind::King).expect("empty");
        board.place(63, Color::White, PieceKind::King).expect("empty");
        let config = SelectorConfig::default();

        let moves = LegalMoveGenerator.generate_legal_moves(&board, Color::Black);
        assert_eq!(moves, vec![Move::new(0, 1), Move::new(0, 8), Move::new(0, 9)]);
        for &mv in &moves {
            assert_eq!(
                candidate_score(&LegalMoveGenerator, &board, Color::Black, mv, &config),
                -15.0
            );
        }

        let (mv, total, considered) = select_move_with_rng(
            &LegalMoveGenerator,
            &board,
            Color::Black,
            Difficulty::Hard,
            &config,
            &mut ZeroRng,
        )
        .expect("king can move");
        assert_eq!(mv, Move::new(0, 1));
        assert_eq!(considered, 3);
        assert!((-20.0..=-10.0).contains(&total));
    }
}
