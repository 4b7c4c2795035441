//! Bot-vs-bot match harness.
//!
//! Plays heuristic engines against each other through the same turn state
//! machine a human front end uses, with seeded engines so a series can be
//! replayed exactly.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_heuristic::HeuristicEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_config::{Difficulty, GameMode};
use crate::game_state::game_outcome::{classify_position, GameStatus};
use crate::game_state::game_state::{GameState, MoveOutcome};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::utils::algebraic::move_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    /// The ply cap was reached before the game ended.
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub white_difficulty: Difficulty,
    pub black_difficulty: Difficulty,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            white_difficulty: Difficulty::Medium,
            black_difficulty: Difficulty::Medium,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub total_plies: u32,
    pub avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} draws={} plies={} avg_move_ms={:.3}",
            self.games,
            self.white_wins,
            self.black_wins,
            self.draws,
            self.total_plies,
            self.avg_move_time_ms
        )
    }
}

/// Play one seeded bot-vs-bot game from the standard layout.
pub fn play_bot_match(seed: u64, config: MatchConfig) -> ChessResult<MatchResult> {
    let state = GameState::new_game(GameMode::BotVsBot, config.black_difficulty);
    play_bot_match_from_state(state, seed, config)
}

/// Play one seeded bot-vs-bot game from a caller-provided state.
pub fn play_bot_match_from_state(
    mut state: GameState,
    seed: u64,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    let mut white = HeuristicEngine::with_seed(config.white_difficulty, seed);
    let mut black = HeuristicEngine::with_seed(config.black_difficulty, seed.wrapping_add(1));
    white.new_game();
    black.new_game();

    let started_at = Utc::now();
    let mut played_moves = Vec::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if state.is_game_over() {
            break;
        }

        let mover = state.current_turn();
        let engine: &mut dyn Engine = match mover {
            Color::White => &mut white,
            Color::Black => &mut black,
        };

        let started = Instant::now();
        let outcome = match state.play_bot_turn(engine) {
            Ok(outcome) => outcome,
            // Starting positions are not classified until a move completes.
            Err(ChessErrors::NoLegalMoves(_)) => break,
            Err(e) => return Err(e),
        };
        let elapsed = started.elapsed().as_nanos();
        match mover {
            Color::White => white_total_time_ns += elapsed,
            Color::Black => black_total_time_ns += elapsed,
        }

        let applied = match outcome {
            MoveOutcome::Applied { applied, .. }
            | MoveOutcome::PendingPromotion { applied, .. } => applied,
        };
        played_moves.push(move_to_algebraic(applied.mv)?);
        state.take_events();
    }

    let status = state.outcome.or_else(|| {
        let status = classify_position(&LegalMoveGenerator, &state.board, state.current_turn());
        status.is_terminal().then_some(status)
    });
    let outcome = match status {
        Some(GameStatus::Checkmate {
            winner: Color::White,
        }) => MatchOutcome::WhiteWinCheckmate,
        Some(GameStatus::Checkmate {
            winner: Color::Black,
        }) => MatchOutcome::BlackWinCheckmate,
        Some(GameStatus::Stalemate) => MatchOutcome::DrawStalemate,
        Some(GameStatus::Ongoing | GameStatus::Check(_)) | None => MatchOutcome::DrawMaxPlies,
    };

    let finished_at = Utc::now();
    info!(
        ?outcome,
        plies = played_moves.len(),
        seed,
        engine = white.name(),
        white = %white.difficulty(),
        black = %black.difficulty(),
        "bot match finished"
    );

    Ok(MatchResult {
        outcome,
        final_state: state,
        played_moves,
        started_at,
        finished_at,
        white_total_time_ns,
        black_total_time_ns,
    })
}

pub fn play_bot_match_series(config: MatchSeriesConfig) -> ChessResult<MatchSeriesStats> {
    play_bot_match_series_with(config, |_, _| {})
}

/// Run a series, handing each finished game to `on_game` with its index.
pub fn play_bot_match_series_with<F>(
    config: MatchSeriesConfig,
    mut on_game: F,
) -> ChessResult<MatchSeriesStats>
where
    F: FnMut(u16, &MatchResult),
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut total_time_ns = 0u128;

    for game in 0..config.games {
        let seed = config.base_seed.wrapping_add(game as u64 * 2);
        let result = play_bot_match(seed, config.per_game)?;
        match result.outcome {
            MatchOutcome::WhiteWinCheckmate => stats.white_wins += 1,
            MatchOutcome::BlackWinCheckmate => stats.black_wins += 1,
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);
        stats.total_plies += result.played_moves.len() as u32;
        total_time_ns += result.white_total_time_ns + result.black_total_time_ns;
        on_game(game, &result);
    }

    if stats.total_plies > 0 {
        stats.avg_move_time_ms = total_time_ns as f64 / stats.total_plies as f64 / 1_000_000.0;
    }
    Ok(stats)
}
