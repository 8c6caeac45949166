//! The fleet: ships placed on the grid and their combined health.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::common::GameError;
use crate::config::{FLEET, NUM_SHIPS};
use crate::coord::Coordinate;
use crate::grid::Grid;
use crate::placer;
use crate::ship::{Orientation, Ship, ShipType};

/// Ships owned for the whole game plus the count of segments not yet hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    health: usize,
}

impl Fleet {
    /// An empty fleet with zero health.
    pub fn new() -> Self {
        Fleet {
            ships: Vec::new(),
            health: 0,
        }
    }

    /// Place the standard fleet on `grid` at random, largest ship first.
    pub fn deploy<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<Self, GameError> {
        let mut fleet = Fleet::new();
        fleet
            .ships
            .try_reserve_exact(NUM_SHIPS)
            .map_err(|_| GameError::AllocationError)?;
        for def in FLEET {
            fleet.place_random(grid, rng, def)?;
        }
        debug!("fleet deployed with health {}", fleet.health);
        Ok(fleet)
    }

    /// Place `ship_type` at a chosen anchor and add it to the fleet.
    pub fn place(
        &mut self,
        grid: &mut Grid,
        ship_type: ShipType,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<&Ship, GameError> {
        self.reserve_slot()?;
        let ship = placer::place(grid, ship_type, anchor, orientation)?;
        Ok(self.push(ship))
    }

    /// Place `ship_type` at a random free position and add it to the fleet.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<&Ship, GameError> {
        self.reserve_slot()?;
        let ship = placer::place_random(grid, rng, ship_type)?;
        Ok(self.push(ship))
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ship segments not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    /// Returns `true` when every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Ship covering `coord`, found by geometry rather than a per-cell tag.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(coord))
    }

    /// Ships with at least one segment still intact.
    pub fn ships_afloat(&self, grid: &Grid) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk(grid)).count()
    }

    /// Ships already sunk on `grid`.
    pub fn ships_sunk(&self, grid: &Grid) -> usize {
        self.ships.len() - self.ships_afloat(grid)
    }

    /// Account for one freshly hit segment.
    pub(crate) fn record_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    fn reserve_slot(&mut self) -> Result<(), GameError> {
        self.ships
            .try_reserve(1)
            .map_err(|_| GameError::AllocationError)
    }

    fn push(&mut self, ship: Ship) -> &Ship {
        self.health += ship.length();
        self.ships.push(ship);
        &self.ships[self.ships.len() - 1]
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
