//! Shot resolution against the grid and fleet.

use log::{debug, warn};

use crate::common::{FireOutcome, GameError};
use crate::coord::Coordinate;
use crate::fleet::Fleet;
use crate::grid::{CellState, Grid};

/// Fire at `coord`, updating `grid` and `fleet`.
///
/// Off-grid coordinates are rejected with [`GameError::OutOfBounds`] and
/// change nothing. Shots at cells already resolved report a repeat and
/// change nothing. A first hit costs the fleet one health and reports
/// `Sunk` when it completes the ship's span.
pub fn fire(coord: Coordinate, grid: &mut Grid, fleet: &mut Fleet) -> Result<FireOutcome, GameError> {
    let prior = grid.strike(coord)?;
    let outcome = match prior {
        CellState::Empty => FireOutcome::Miss,
        CellState::Miss => FireOutcome::RepeatMiss,
        CellState::Hit => FireOutcome::RepeatHit,
        CellState::Occupied => {
            fleet.record_hit();
            match fleet.ship_at(coord) {
                Some(ship) if ship.is_sunk(grid) => FireOutcome::Sunk(ship.ship_type()),
                Some(_) => FireOutcome::Hit,
                None => {
                    warn!("occupied cell {} belongs to no ship", coord);
                    FireOutcome::Hit
                }
            }
        }
    };
    debug!("shot at {}: {:?}, health {}", coord, outcome, fleet.health());
    Ok(outcome)
}
