use log::info;
use rand::Rng;

use crate::{
    combat,
    common::{FireOutcome, GameError},
    coord::Coordinate,
    fleet::Fleet,
    grid::Grid,
    input::Command,
};

/// Phase of a game session once setup has succeeded.
///
/// Setup itself is [`Game::setup`]: a `Game` only exists after the grid was
/// built and every ship placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Why a game reached `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Ending {
    /// Every ship segment was hit.
    FleetDestroyed,
    /// The player asked to stop.
    Exit,
}

/// Totals for a finished (or running) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSummary {
    pub size: usize,
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    pub repeats: usize,
    pub health: usize,
    pub ships_sunk: usize,
    pub status: GameStatus,
    pub ending: Option<Ending>,
}

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Fired(FireOutcome),
    Exited,
}

/// Single game session owning the grid and fleet.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    fleet: Fleet,
    status: GameStatus,
    ending: Option<Ending>,
    shots: usize,
    hits: usize,
    misses: usize,
    repeats: usize,
}

impl Game {
    /// Build a grid of `size` and deploy the standard fleet on it.
    ///
    /// Nothing is handed out unless every ship was placed.
    pub fn setup<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, GameError> {
        info!("setting up a {}x{} board", size, size);
        let mut grid = Grid::new(size)?;
        let fleet = Fleet::deploy(&mut grid, rng)?;
        Ok(Self::with_fleet(grid, fleet))
    }

    /// Start playing on a grid already populated by `fleet`.
    pub fn with_fleet(grid: Grid, fleet: Fleet) -> Self {
        let mut game = Game {
            grid,
            fleet,
            status: GameStatus::Playing,
            ending: None,
            shots: 0,
            hits: 0,
            misses: 0,
            repeats: 0,
        };
        if game.fleet.is_destroyed() {
            game.finish(Ending::FleetDestroyed);
        }
        game
    }

    /// Fire at `coord`. Off-grid shots and shots after the game ended are
    /// errors that leave the game untouched.
    pub fn fire(&mut self, coord: Coordinate) -> Result<FireOutcome, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::GameOver);
        }
        let outcome = combat::fire(coord, &mut self.grid, &mut self.fleet)?;
        match outcome {
            FireOutcome::Miss => self.misses += 1,
            FireOutcome::Hit | FireOutcome::Sunk(_) => self.hits += 1,
            FireOutcome::RepeatMiss | FireOutcome::RepeatHit => self.repeats += 1,
        }
        if outcome.is_resolved() {
            self.shots += 1;
        }
        if self.fleet.is_destroyed() {
            self.finish(Ending::FleetDestroyed);
        }
        Ok(outcome)
    }

    /// Apply a parsed player command.
    pub fn apply(&mut self, command: Command) -> Result<Turn, GameError> {
        match command {
            Command::Fire(coord) => self.fire(coord).map(Turn::Fired),
            Command::Exit => {
                self.quit();
                Ok(Turn::Exited)
            }
        }
    }

    /// End the game at the player's request. No-op once over.
    pub fn quit(&mut self) {
        if self.status == GameStatus::Playing {
            self.finish(Ending::Exit);
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn health(&self) -> usize {
        self.fleet.health()
    }

    /// Player's view of the board.
    pub fn render(&self) -> alloc::string::String {
        self.grid.render()
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            size: self.grid.size(),
            shots: self.shots,
            hits: self.hits,
            misses: self.misses,
            repeats: self.repeats,
            health: self.fleet.health(),
            ships_sunk: self.fleet.ships_sunk(&self.grid),
            status: self.status,
            ending: self.ending,
        }
    }

    fn finish(&mut self, ending: Ending) {
        info!("game over: {:?} after {} shots", ending, self.shots);
        self.status = GameStatus::GameOver;
        self.ending = Some(ending);
    }
}
