//! Common types: shot outcomes and game errors.

use crate::ship::ShipType;

/// Result of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk(ShipType),
    /// Cell was already a miss; nothing changes.
    RepeatMiss,
    /// Cell was already hit; nothing changes.
    RepeatHit,
}

impl FireOutcome {
    /// Message shown to the player for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            FireOutcome::Miss => "Miss",
            FireOutcome::Hit => "Hit",
            FireOutcome::Sunk(_) => "Hit and sunk.",
            FireOutcome::RepeatMiss => "Invalid move, try again",
            FireOutcome::RepeatHit => "Already been hit.",
        }
    }

    /// Whether the shot changed the board.
    pub fn is_resolved(&self) -> bool {
        matches!(self, FireOutcome::Miss | FireOutcome::Hit | FireOutcome::Sunk(_))
    }

    /// Whether the shot struck a ship for the first time.
    pub fn is_hit(&self) -> bool {
        matches!(self, FireOutcome::Hit | FireOutcome::Sunk(_))
    }
}

/// Errors returned by grid, placement and combat operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board size outside the supported range.
    InvalidBoardSize(usize),
    /// Board size input was not a number.
    MalformedBoardSize,
    /// Cell storage could not be reserved.
    AllocationError,
    /// Random placement gave up after the configured number of attempts.
    PlacementExhausted { length: usize, attempts: usize },
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship would extend past the grid edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Game has already finished.
    GameOver,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidBoardSize(n) => write!(
                f,
                "INVALID BOARD SIZE: {} (must be between {} and {})",
                n,
                crate::config::MIN_BOARD_SIZE,
                crate::config::MAX_BOARD_SIZE
            ),
            GameError::MalformedBoardSize => write!(f, "INVALID BOARD SIZE: not a number"),
            GameError::AllocationError => write!(f, "Memory allocation went wrong"),
            GameError::PlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate out of bounds: row={}, col={}", row, col)
            }
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GameError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
