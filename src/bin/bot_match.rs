//! Standalone bot-vs-bot series runner.
//!
//! Run with:
//! `cargo run --release --bin bot_match -- --games 10 --difficulty hard`

use tracing_subscriber::EnvFilter;

use duel_chess::chess_errors::{ChessErrors, ChessResult};
use duel_chess::game_state::game_config::Difficulty;
use duel_chess::utils::match_harness::{play_bot_match_series_with, MatchConfig, MatchSeriesConfig};
use duel_chess::utils::render_game_state::render_game_state;

fn parse_number<T: std::str::FromStr>(flag: &str, raw: Option<String>) -> ChessResult<T> {
    let raw = raw.ok_or_else(|| ChessErrors::InvalidOption(format!("{flag} needs a value")))?;
    raw.parse()
        .map_err(|_| ChessErrors::InvalidOption(format!("{flag} '{raw}'")))
}

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut series = MatchSeriesConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--games" => series.games = parse_number(&flag, args.next())?,
            "--max-plies" => series.per_game.max_plies = parse_number(&flag, args.next())?,
            "--seed" => series.base_seed = parse_number(&flag, args.next())?,
            "--difficulty" => {
                let difficulty: Difficulty = parse_number(&flag, args.next())?;
                series.per_game = MatchConfig {
                    white_difficulty: difficulty,
                    black_difficulty: difficulty,
                    ..series.per_game
                };
            }
            other => return Err(ChessErrors::InvalidOption(other.to_owned())),
        }
    }

    let stats = play_bot_match_series_with(series, |game, result| {
        println!("{}", render_game_state(&result.final_state));
        println!(
            "game {}: {:?} after {} plies in {} ms",
            game + 1,
            result.outcome,
            result.played_moves.len(),
            result.duration_ms()
        );
        println!("{}", result.played_moves.join(" "));
    })?;
    println!("{}", stats.report());
    Ok(())
}
