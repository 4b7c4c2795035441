//! Interactive terminal game.
//!
//! Run with:
//! `cargo run --release -- --mode human-vs-bot --difficulty hard`
//!
//! Enter moves as `e7e5` or `e7 e5`. Other commands: `board`, `moves e7`,
//! `pause`, `resume`, `new`, `quit`.

use std::io::{self, BufRead, Write};
use std::thread;

use tracing_subscriber::EnvFilter;

use duel_chess::chess_errors::{ChessErrors, ChessResult};
use duel_chess::engines::engine_heuristic::HeuristicEngine;
use duel_chess::game_state::chess_types::PieceKind;
use duel_chess::game_state::game_config::{Difficulty, GameConfig, GameMode};
use duel_chess::game_state::game_state::{GameState, MoveOutcome};
use duel_chess::move_generation::legal_move_generator::legal_destinations;
use duel_chess::utils::algebraic::{algebraic_to_square, parse_move, square_to_algebraic};
use duel_chess::utils::render_game_state::render_game_state;

fn parse_args() -> ChessResult<(GameConfig, Option<u64>)> {
    let mut config = GameConfig::default();
    let mut seed = None;
    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| ChessErrors::InvalidOption(format!("{flag} needs a value")))
        };
        match flag.as_str() {
            "--mode" | "-m" => config.mode = value()?.parse()?,
            "--difficulty" | "-d" => config.difficulty = value()?.parse()?,
            "--seed" => {
                let raw = value()?;
                seed = Some(
                    raw.parse()
                        .map_err(|_| ChessErrors::InvalidOption(format!("seed '{raw}'")))?,
                );
            }
            other => return Err(ChessErrors::InvalidOption(other.to_owned())),
        }
    }
    Ok((config, seed))
}

fn print_events(state: &mut GameState) {
    for event in state.take_events() {
        println!("{event}");
    }
}

fn new_engine(difficulty: Difficulty, seed: Option<u64>) -> HeuristicEngine {
    match seed {
        Some(seed) => HeuristicEngine::with_seed(difficulty, seed),
        None => HeuristicEngine::new(difficulty),
    }
}

/// Let the bot move while it is the bot's turn, pacing each move the way a
/// graphical front end would.
fn run_bot_turns(state: &mut GameState, engine: &mut HeuristicEngine) -> ChessResult<()> {
    while state.is_bot_turn() && !state.is_game_over() && !state.is_paused() {
        thread::sleep(state.config.bot_move_delay() + state.config.difficulty.thinking_time());
        let result = state.play_bot_turn(engine);
        print_events(state);
        match result {
            Ok(_) => println!("{}", render_game_state(state)),
            Err(ChessErrors::NoLegalMoves(_)) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    print!("> ");
    io::stdout().flush().ok();
    lines.next().and_then(Result::ok)
}

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let (config, seed) = parse_args()?;
    let mut state = GameState::new_game(config.mode, config.difficulty);
    let mut engine = new_engine(config.difficulty, seed);
    println!("{} ({}), Black moves first", config.mode, config.difficulty);
    println!("{}", render_game_state(&state));

    if config.mode == GameMode::BotVsBot {
        thread::sleep(config.opening_delay());
    }
    run_bot_turns(&mut state, &mut engine)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while let Some(line) = read_line(&mut lines) {
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "board" => println!("{}", render_game_state(&state)),
            "pause" => {
                if let Err(e) = state.pause() {
                    println!("{e}");
                }
                print_events(&mut state);
            }
            "resume" => {
                if let Err(e) = state.resume() {
                    println!("{e}");
                }
                print_events(&mut state);
                run_bot_turns(&mut state, &mut engine)?;
            }
            "new" => {
                state = GameState::new_game(config.mode, config.difficulty);
                engine = new_engine(config.difficulty, seed);
                println!("{}", render_game_state(&state));
                run_bot_turns(&mut state, &mut engine)?;
            }
            _ if command.starts_with("moves ") => {
                match algebraic_to_square(&command["moves ".len()..]) {
                    Ok(from) => {
                        let names: Vec<String> = legal_destinations(&state.board, from)
                            .into_iter()
                            .filter_map(|to| square_to_algebraic(to).ok())
                            .collect();
                        println!("{}", names.join(" "));
                    }
                    Err(e) => println!("{e}"),
                }
            }
            _ => {
                if state.is_bot_turn() {
                    println!("It is the bot's turn");
                    continue;
                }
                let mv = match parse_move(command) {
                    Ok(mv) => mv,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                let result = state.attempt_move(mv.from, mv.to);
                print_events(&mut state);
                match result {
                    Ok(MoveOutcome::PendingPromotion { square, .. }) => {
                        println!("Promote to queen, rook, bishop or knight?");
                        let choice = read_line(&mut lines).unwrap_or_default();
                        let kind = PieceKind::promotion_choice(&choice);
                        state.resolve_promotion(square, kind)?;
                        print_events(&mut state);
                    }
                    Ok(MoveOutcome::Applied { .. }) => {}
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                }
                println!("{}", render_game_state(&state));
                run_bot_turns(&mut state, &mut engine)?;
            }
        }
    }

    Ok(())
}
