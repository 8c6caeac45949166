//! Square board of cells owned as one contiguous buffer.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::coord::Coordinate;

/// Glyph for cells the player has not uncovered, ships included.
pub const GLYPH_UNKNOWN: char = '_';
/// Glyph for a missed shot.
pub const GLYPH_MISS: char = '0';
/// Glyph for a hit ship segment.
pub const GLYPH_HIT: char = 'x';

/// State of a single cell.
///
/// Shots only move cells `Empty -> Miss` and `Occupied -> Hit`; both results
/// are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Occupied,
    Hit,
    Miss,
}

impl CellState {
    /// Glyph shown to the player. Occupied cells look like open water.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty | CellState::Occupied => GLYPH_UNKNOWN,
            CellState::Miss => GLYPH_MISS,
            CellState::Hit => GLYPH_HIT,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an `size`×`size` grid with every cell empty.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size * size)
            .map_err(|_| GameError::AllocationError)?;
        cells.resize(size * size, CellState::Empty);
        Ok(Grid { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `coord` lies on the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// State at `coord`, or `None` when off the grid.
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).ok().map(|i| self.cells[i])
    }

    /// Overwrite the state at `coord`.
    pub fn set(&mut self, coord: Coordinate, state: CellState) -> Result<(), GameError> {
        let i = self.index(coord)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Apply a shot to `coord` and return the state the cell had before.
    ///
    /// `Empty` becomes `Miss`, `Occupied` becomes `Hit`; `Hit` and `Miss`
    /// are left untouched.
    pub fn strike(&mut self, coord: Coordinate) -> Result<CellState, GameError> {
        let i = self.index(coord)?;
        let prior = self.cells[i];
        self.cells[i] = match prior {
            CellState::Empty => CellState::Miss,
            CellState::Occupied => CellState::Hit,
            terminal => terminal,
        };
        Ok(prior)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Iterator over every coordinate, row by row.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.size).flat_map(move |r| (0..self.size).map(move |c| Coordinate::new(r, c)))
    }

    /// Render the player's view of the board.
    pub fn render(&self) -> String {
        alloc::format!("{}", self)
    }

    fn index(&self, coord: Coordinate) -> Result<usize, GameError> {
        if self.contains(coord) {
            Ok(coord.row * self.size + coord.col)
        } else {
            Err(GameError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        }
    }
}

/// Column header line followed by one line per row, e.g. for size 5:
///
/// ```text
/// ,1,2,3,4,5
/// a_ _ _ _ _
/// b_ x 0 _ _
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in 0..self.size {
            write!(f, ",{}", c + 1)?;
        }
        for r in 0..self.size {
            writeln!(f)?;
            write!(f, "{}", Coordinate::new(r, 0).row_letter())?;
            for c in 0..self.size {
                write!(f, "{} ", self.cells[r * self.size + c].glyph())?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = match self.cells[r * self.size + c] {
                    CellState::Empty => '.',
                    CellState::Occupied => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
