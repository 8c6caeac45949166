use battleships::{
    CellState, Coordinate, FireOutcome, Game, GameStatus, Ending, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
    NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_game(seed: u64, size: usize) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    Game::setup(size, &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn setup_places_disjoint_fleet(seed in any::<u64>(), size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE) {
        let game = random_game(seed, size);
        let grid = game.grid();
        let ships = game.fleet().ships();

        prop_assert_eq!(ships.len(), NUM_SHIPS);
        prop_assert_eq!(grid.count(CellState::Occupied), TOTAL_SHIP_CELLS);
        prop_assert_eq!(game.health(), TOTAL_SHIP_CELLS);
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                prop_assert!(!a.overlaps(b));
            }
        }
        for coord in grid.coordinates() {
            let owners = ships.iter().filter(|s| s.contains(coord)).count();
            let expected = usize::from(grid.get(coord) == Some(CellState::Occupied));
            prop_assert_eq!(owners, expected);
        }
    }

    #[test]
    fn repeat_fire_is_idempotent(
        seed in any::<u64>(),
        size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE,
        row in 0..MAX_BOARD_SIZE,
        col in 0..MAX_BOARD_SIZE,
    ) {
        let mut game = random_game(seed, size);
        let coord = Coordinate::new(row % size, col % size);
        let first = game.fire(coord).unwrap();
        prop_assert!(first.is_resolved());

        let grid_after = game.grid().clone();
        let health_after = game.health();
        let second = game.fire(coord).unwrap();
        prop_assert!(matches!(second, FireOutcome::RepeatHit | FireOutcome::RepeatMiss));
        prop_assert_eq!(game.grid(), &grid_after);
        prop_assert_eq!(game.health(), health_after);
        prop_assert_eq!(game.summary().shots, 1);
        prop_assert_eq!(game.summary().repeats, 1);
    }

    #[test]
    fn health_counts_down_to_zero(seed in any::<u64>(), size in MIN_BOARD_SIZE..=12usize) {
        let mut game = random_game(seed, size);
        let targets: Vec<Coordinate> = game.grid().coordinates().collect();
        let mut hits = 0;
        let mut sunk = 0;
        for coord in targets {
            if game.is_over() {
                break;
            }
            let before = game.health();
            let outcome = game.fire(coord).unwrap();
            if outcome.is_hit() {
                hits += 1;
                prop_assert_eq!(game.health(), before - 1);
            } else {
                prop_assert_eq!(game.health(), before);
            }
            if let FireOutcome::Sunk(_) = outcome {
                sunk += 1;
                let ship = game.fleet().ship_at(coord).unwrap();
                prop_assert!(ship.is_sunk(game.grid()));
            } else if outcome == FireOutcome::Hit {
                let ship = game.fleet().ship_at(coord).unwrap();
                prop_assert!(!ship.is_sunk(game.grid()));
            }
            prop_assert_eq!(game.is_over(), hits == TOTAL_SHIP_CELLS);
        }
        prop_assert_eq!(hits, TOTAL_SHIP_CELLS);
        prop_assert_eq!(sunk, NUM_SHIPS);
        prop_assert_eq!(game.status(), GameStatus::GameOver);
        prop_assert_eq!(game.ending(), Some(Ending::FleetDestroyed));
        prop_assert_eq!(game.grid().count(CellState::Occupied), 0);
    }
}
