//! Parsing of player input: board size and fire commands.

use core::fmt;

use crate::common::GameError;
use crate::config::{EXIT_TOKEN, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::coord::Coordinate;

/// A player command read during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(Coordinate),
    Exit,
}

/// Reasons a fire command was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing was entered.
    Empty,
    /// Row must be a single lowercase letter.
    BadRow,
    /// Column must be a positive integer.
    BadColumn,
    /// Coordinate lies outside the board.
    OutOfBounds { row: char, col: usize },
    /// Extra tokens after the coordinate.
    TrailingInput,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Empty => write!(f, "Empty input"),
            MoveError::BadRow => write!(f, "Row must be a single letter"),
            MoveError::BadColumn => write!(f, "Column must be a number"),
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Coordinate {}{} is off the board", row, col)
            }
            MoveError::TrailingInput => write!(f, "Unexpected input after coordinate"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Parse a board size in `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`.
pub fn parse_board_size(input: &str) -> Result<usize, GameError> {
    let size: usize = input
        .trim()
        .parse()
        .map_err(|_| GameError::MalformedBoardSize)?;
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(GameError::InvalidBoardSize(size));
    }
    Ok(size)
}

/// Parse a fire command for a `size`×`size` board.
///
/// Accepts the exit token, `c 4` or `c4`. Rows are lowercase letters starting
/// at `a`; columns start at 1.
pub fn parse_command(input: &str, size: usize) -> Result<Command, MoveError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(MoveError::Empty);
    }
    if input == EXIT_TOKEN {
        return Ok(Command::Exit);
    }

    let mut chars = input.chars();
    let row_ch = chars.next().ok_or(MoveError::Empty)?;
    if !row_ch.is_ascii_lowercase() {
        return Err(MoveError::BadRow);
    }
    let rest = chars.as_str();
    // a letter glued to more letters ("ab 3", "exit2") is not a row
    if rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(MoveError::BadRow);
    }
    let mut tokens = rest.split_whitespace();
    let col_str = tokens.next().ok_or(MoveError::BadColumn)?;
    if tokens.next().is_some() {
        return Err(MoveError::TrailingInput);
    }
    let col: usize = col_str.parse().map_err(|_| MoveError::BadColumn)?;

    let row = (row_ch as u8 - b'a') as usize;
    if row >= size || col == 0 || col > size {
        return Err(MoveError::OutOfBounds { row: row_ch, col });
    }
    Ok(Command::Fire(Coordinate::new(row, col - 1)))
}
