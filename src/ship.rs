//! Ship definitions and geometry.

use core::fmt;

use crate::common::GameError;
use crate::coord::Coordinate;
use crate::grid::{CellState, Grid};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A ship anchored at its top-left-most cell.
///
/// Ships never move once built; which cells they cover is derived from the
/// anchor, orientation and length.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    anchor: Coordinate,
}

impl Ship {
    /// Build a ship at `anchor`, checking that it fits on a `size`×`size` grid.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        anchor: Coordinate,
        size: usize,
    ) -> Result<Self, GameError> {
        let len = ship_type.length();
        let (along, across) = match orientation {
            Orientation::Horizontal => (anchor.col, anchor.row),
            Orientation::Vertical => (anchor.row, anchor.col),
        };
        let past_edge = along.checked_add(len).map_or(true, |end| end > size);
        if len == 0 || across >= size || past_edge {
            return Err(GameError::ShipOutOfBounds);
        }
        Ok(Ship {
            ship_type,
            orientation,
            anchor,
        })
    }

    /// Cells covered by the ship, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (anchor, orientation) = (self.anchor, self.orientation);
        (0..self.ship_type.length()).map(move |i| anchor.step(orientation, i))
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        let len = self.ship_type.length();
        match self.orientation {
            Orientation::Horizontal => {
                coord.row == self.anchor.row
                    && (self.anchor.col..self.anchor.col + len).contains(&coord.col)
            }
            Orientation::Vertical => {
                coord.col == self.anchor.col
                    && (self.anchor.row..self.anchor.row + len).contains(&coord.row)
            }
        }
    }

    /// Whether any cell is shared with `other`.
    pub fn overlaps(&self, other: &Ship) -> bool {
        self.cells().any(|c| other.contains(c))
    }

    /// A ship is sunk once every cell in its span reads `Hit` on `grid`.
    pub fn is_sunk(&self, grid: &Grid) -> bool {
        self.cells().all(|c| grid.get(c) == Some(CellState::Hit))
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Anchor cell of the ship.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", anchor: {}, orientation: {:?}, length: {} }}",
            self.ship_type.name(),
            self.anchor,
            self.orientation,
            self.ship_type.length(),
        )
    }
}
