//! Square-name conversions for terminal input and log output.
//!
//! Column `a..h` runs left to right and rank `8` is row 0, so index 0 is
//! `a8` (Black's queen-side rook) and index 63 is `h1`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Move, Square};

/// Convert a square name (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Ok(row * 8 + col)
}

/// Convert a square index (`0..=63`) to its name (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessErrors::OutOfBounds(square as i32));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'8' - square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse "e7e5", "e7 e5" or "e7-e5".
pub fn parse_move(text: &str) -> ChessResult<Move> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    let from = algebraic_to_square(&compact[..2])?;
    let to = algebraic_to_square(&compact[2..])?;
    Ok(Move::new(from, to))
}

pub fn move_to_algebraic(mv: Move) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(mv.from)?,
        square_to_algebraic(mv.to)?
    ))
}
