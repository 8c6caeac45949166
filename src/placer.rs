//! Ship placement: manual and by bounded rejection sampling.

use log::{debug, warn};
use rand::Rng;

use crate::common::GameError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::coord::Coordinate;
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, Ship, ShipType};

/// Place `ship_type` at `anchor`, marking its cells `Occupied`.
///
/// Every candidate cell must be `Empty`; the grid is left untouched on error.
pub fn place(
    grid: &mut Grid,
    ship_type: ShipType,
    anchor: Coordinate,
    orientation: Orientation,
) -> Result<Ship, GameError> {
    let ship = Ship::new(ship_type, orientation, anchor, grid.size())?;
    if !fits(grid, &ship) {
        return Err(GameError::ShipOverlaps);
    }
    for cell in ship.cells() {
        grid.set(cell, CellState::Occupied)?;
    }
    debug!("placed {:?}", ship);
    Ok(ship)
}

/// Returns a random free `(anchor, orientation)` for `ship_type`.
///
/// Orientation is chosen uniformly, then an anchor uniformly among the
/// positions where the ship stays on the grid. Gives up after
/// [`MAX_PLACEMENT_ATTEMPTS`] rejected candidates.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
    ship_type: ShipType,
) -> Result<(Coordinate, Orientation), GameError> {
    let size = grid.size();
    let len = ship_type.length();
    if len == 0 || len > size {
        return Err(GameError::ShipOutOfBounds);
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_r = if orient == Orientation::Vertical {
            size - len
        } else {
            size - 1
        };
        let max_c = if orient == Orientation::Horizontal {
            size - len
        } else {
            size - 1
        };
        let anchor = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
        let ship = Ship::new(ship_type, orient, anchor, size)?;
        if fits(grid, &ship) {
            return Ok((anchor, orient));
        }
    }
    warn!(
        "gave up placing {} after {} attempts",
        ship_type.name(),
        MAX_PLACEMENT_ATTEMPTS
    );
    Err(GameError::PlacementExhausted {
        length: len,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Pick a random free position for `ship_type` and place it there.
pub fn place_random<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    ship_type: ShipType,
) -> Result<Ship, GameError> {
    let (anchor, orientation) = random_placement(grid, rng, ship_type)?;
    place(grid, ship_type, anchor, orientation)
}

fn fits(grid: &Grid, ship: &Ship) -> bool {
    ship.cells().all(|c| grid.get(c) == Some(CellState::Empty))
}
