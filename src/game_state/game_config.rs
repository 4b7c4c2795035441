//! Game configuration: who controls each side and how strong the bot plays.
//!
//! Pacing values (`thinking_time`, `bot_move_delay`) only matter to front
//! ends; the engine itself never sleeps.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    /// The human plays Black (and so moves first); the bot plays White.
    HumanVsBot,
    BotVsBot,
}

impl GameMode {
    pub const fn bot_controls(self, color: Color) -> bool {
        match self {
            GameMode::HumanVsHuman => false,
            GameMode::HumanVsBot => matches!(color, Color::White),
            GameMode::BotVsBot => true,
        }
    }
}

impl FromStr for GameMode {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human-vs-human" | "hvh" => Ok(GameMode::HumanVsHuman),
            "human-vs-bot" | "hvb" => Ok(GameMode::HumanVsBot),
            "bot-vs-bot" | "bvb" => Ok(GameMode::BotVsBot),
            other => Err(ChessErrors::InvalidOption(format!("game mode '{other}'"))),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::HumanVsHuman => "human-vs-human",
            GameMode::HumanVsBot => "human-vs-bot",
            GameMode::BotVsBot => "bot-vs-bot",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Width of the uniform noise added to every candidate's score.
    pub const fn randomness(self) -> u32 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium => 50,
            Difficulty::Hard => 10,
        }
    }

    /// Artificial delay a front end shows before the bot's move.
    pub const fn thinking_time(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(500),
            Difficulty::Medium => Duration::from_millis(1000),
            Difficulty::Hard => Duration::from_millis(1500),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ChessErrors::InvalidOption(format!("difficulty '{other}'"))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

impl GameConfig {
    pub const fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self { mode, difficulty }
    }

    /// Pause between a completed move and the bot's reply.
    pub const fn bot_move_delay(&self) -> Duration {
        match self.mode {
            GameMode::BotVsBot => Duration::from_millis(800),
            _ => Duration::from_millis(500),
        }
    }

    /// Pause before the very first bot move of a bot-vs-bot game.
    pub const fn opening_delay(&self) -> Duration {
        Duration::from_millis(1000)
    }
}
