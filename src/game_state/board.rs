//! 64-square board model and the geometry helpers everything else builds on.
//!
//! `Board` owns every cell plus the king-position cache. It is a small `Copy`
//! value, so simulations (self-check tests, selector lookahead) run on a
//! scratch copy and the live board is never touched.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{back_rank_row, pawn_home_row, BACK_RANK};
use crate::game_state::chess_types::*;

pub const BOARD_WIDTH: i8 = 8;
pub const SQUARE_COUNT: usize = 64;

#[inline]
pub const fn row_of(square: Square) -> i8 {
    (square / 8) as i8
}

#[inline]
pub const fn col_of(square: Square) -> i8 {
    (square % 8) as i8
}

#[inline]
pub const fn is_valid_row_col(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_WIDTH && col >= 0 && col < BOARD_WIDTH
}

/// Square at `(row, col)`, rejecting coordinates off the board.
#[inline]
pub fn square_index(row: i8, col: i8) -> ChessResult<Square> {
    if !is_valid_row_col(row, col) {
        let flat = row as i32 * BOARD_WIDTH as i32 + col as i32;
        return Err(ChessErrors::OutOfBounds(flat));
    }
    Ok((row * BOARD_WIDTH + col) as Square)
}

/// Validate a raw square index coming from outside the engine.
#[inline]
pub fn checked_square(index: i32) -> ChessResult<Square> {
    if (0..SQUARE_COUNT as i32).contains(&index) {
        Ok(index as Square)
    } else {
        Err(ChessErrors::OutOfBounds(index))
    }
}

/// Square currently holding each color's king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KingPositions {
    pub white: Option<Square>,
    pub black: Option<Square>,
}

impl KingPositions {
    #[inline]
    pub const fn get(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    fn set(&mut self, color: Color, square: Option<Square>) {
        match color {
            Color::White => self.white = square,
            Color::Black => self.black = square,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; SQUARE_COUNT],
    kings: KingPositions,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::EMPTY; SQUARE_COUNT],
            kings: KingPositions {
                white: None,
                black: None,
            },
        }
    }

    /// Standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::Black, Color::White] {
            let back = back_rank_row(color);
            let pawns = pawn_home_row(color);
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as i8;
                board.put(
                    (back * BOARD_WIDTH + col) as Square,
                    Cell::occupied(color, *kind),
                );
                board.put(
                    (pawns * BOARD_WIDTH + col) as Square,
                    Cell::occupied(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    /// Contents of `square`; squares off the board read as empty.
    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells.get(square as usize).copied().unwrap_or(Cell::EMPTY)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; SQUARE_COUNT] {
        &self.cells
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cell(square).is_empty()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings.get(color)
    }

    /// Occupied squares of `color` in ascending order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(sq, cell)| {
            cell.occupant()
                .filter(|p| p.color == color)
                .map(|p| (sq as Square, p.kind))
        })
    }

    /// Place a piece on an empty square. A second king of the same color
    /// replaces nothing and is rejected.
    pub fn place(&mut self, square: Square, color: Color, kind: PieceKind) -> ChessResult<()> {
        let square = checked_square(square as i32)?;
        if !self.is_empty(square) {
            return Err(ChessErrors::SquareOccupied(square));
        }
        if kind == PieceKind::King {
            if let Some(existing) = self.kings.get(color) {
                return Err(ChessErrors::SquareOccupied(existing));
            }
        }
        self.put(square, Cell::occupied(color, kind));
        Ok(())
    }

    /// Clear a square, returning what stood there.
    pub fn remove(&mut self, square: Square) -> ChessResult<Option<Piece>> {
        let square = checked_square(square as i32)?;
        let previous = self.cells[square as usize].occupant();
        self.put(square, Cell::EMPTY);
        Ok(previous)
    }

    /// Write a cell and keep the king cache consistent with it.
    pub(crate) fn put(&mut self, square: Square, cell: Cell) {
        if let Some(old) = self.cells[square as usize].occupant() {
            if old.kind == PieceKind::King && self.kings.get(old.color) == Some(square) {
                self.kings.set(old.color, None);
            }
        }
        if let Some(new) = cell.occupant() {
            if new.kind == PieceKind::King {
                self.kings.set(new.color, Some(square));
            }
        }
        self.cells[square as usize] = cell;
    }
}
