//! Core value types shared by the board model, the legality engine and the
//! move selector.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Board square index (`0..=63`). Row 0 is Black's back rank.
pub type Square = u8;

/// Side to move. Black starts on rows 0-1 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    #[inline]
    pub const fn title(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind (color is represented separately on the cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by evaluation only, never by legality.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Interpret a promotion choice coming from a front end. Anything that is
    /// not a rook, bishop or knight promotes to a queen.
    pub fn promotion_choice(choice: &str) -> PieceKind {
        match choice.trim().to_ascii_lowercase().as_str() {
            "rook" | "r" => PieceKind::Rook,
            "bishop" | "b" => PieceKind::Bishop,
            "knight" | "n" => PieceKind::Knight,
            _ => PieceKind::Queen,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A colored piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// State owned by a single square.
///
/// A cell either holds a colored piece or nothing, so `piece()` is `None`
/// exactly when `color()` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    occupant: Option<Piece>,
}

impl Cell {
    pub const EMPTY: Cell = Cell { occupant: None };

    #[inline]
    pub const fn occupied(color: Color, kind: PieceKind) -> Self {
        Self {
            occupant: Some(Piece::new(color, kind)),
        }
    }

    #[inline]
    pub const fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    #[inline]
    pub fn piece(&self) -> Option<PieceKind> {
        self.occupant.map(|p| p.kind)
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.occupant.map(|p| p.color)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[inline]
    pub fn holds(&self, color: Color) -> bool {
        self.color() == Some(color)
    }
}

/// Source and destination squares of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Per-color "king is attacked" flags, recomputed after every completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckStatus {
    pub white: bool,
    pub black: bool,
}

impl CheckStatus {
    #[inline]
    pub const fn get(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn set(&mut self, color: Color, in_check: bool) {
        match color {
            Color::White => self.white = in_check,
            Color::Black => self.black = in_check,
        }
    }
}
