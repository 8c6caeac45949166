//! Board coordinates.
//!
//! Internally rows and columns are 0-indexed. Players address rows with a
//! lowercase letter (`a` is the top row) and columns with a 1-indexed number.

use core::fmt;

use crate::config::MAX_BOARD_SIZE;
use crate::ship::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell `steps` cells further along `orientation`.
    pub fn step(self, orientation: Orientation, steps: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col + steps),
            Orientation::Vertical => Self::new(self.row + steps, self.col),
        }
    }

    /// Row letter as typed by the player, `?` for rows past `z`.
    pub fn row_letter(&self) -> char {
        if self.row < MAX_BOARD_SIZE {
            char::from_u32('a' as u32 + self.row as u32).unwrap_or('?')
        } else {
            '?'
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col.saturating_add(1))
    }
}
