use battleships::{
    fire, CellState, Coordinate, FireOutcome, Fleet, GameError, Grid, Orientation, FLEET,
};

fn destroyer_board() -> (Grid, Fleet) {
    let mut grid = Grid::new(5).unwrap();
    let mut fleet = Fleet::new();
    fleet
        .place(&mut grid, FLEET[3], Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    (grid, fleet)
}

#[test]
fn test_destroyer_scenario() {
    let (mut grid, mut fleet) = destroyer_board();
    assert_eq!(fleet.health(), 2);

    let first = Coordinate::new(0, 0);
    assert_eq!(fire(first, &mut grid, &mut fleet).unwrap(), FireOutcome::Hit);
    assert_eq!(fleet.health(), 1);

    assert_eq!(fire(first, &mut grid, &mut fleet).unwrap(), FireOutcome::RepeatHit);
    assert_eq!(fleet.health(), 1);
    assert_eq!(grid.get(first), Some(CellState::Hit));

    assert_eq!(
        fire(Coordinate::new(0, 1), &mut grid, &mut fleet).unwrap(),
        FireOutcome::Sunk(FLEET[3])
    );
    assert_eq!(fleet.health(), 0);
    assert!(fleet.is_destroyed());

    assert_eq!(
        fire(Coordinate::new(1, 1), &mut grid, &mut fleet).unwrap(),
        FireOutcome::Miss
    );
    assert_eq!(grid.get(Coordinate::new(1, 1)), Some(CellState::Miss));
}

#[test]
fn test_repeat_miss_is_invalid_move() {
    let (mut grid, mut fleet) = destroyer_board();
    let water = Coordinate::new(3, 3);
    assert_eq!(fire(water, &mut grid, &mut fleet).unwrap(), FireOutcome::Miss);
    let before = grid.clone();
    let outcome = fire(water, &mut grid, &mut fleet).unwrap();
    assert_eq!(outcome, FireOutcome::RepeatMiss);
    assert_eq!(outcome.message(), "Invalid move, try again");
    assert_eq!(grid, before);
    assert_eq!(fleet.health(), 2);
}

#[test]
fn test_out_of_bounds_changes_nothing() {
    let (mut grid, mut fleet) = destroyer_board();
    let before = grid.clone();
    assert_eq!(
        fire(Coordinate::new(5, 0), &mut grid, &mut fleet).unwrap_err(),
        GameError::OutOfBounds { row: 5, col: 0 }
    );
    assert_eq!(grid, before);
    assert_eq!(fleet.health(), 2);
}

#[test]
fn test_carrier_middle_hit_is_not_sunk() {
    let mut grid = Grid::new(6).unwrap();
    let mut fleet = Fleet::new();
    fleet
        .place(&mut grid, FLEET[0], Coordinate::new(0, 3), Orientation::Vertical)
        .unwrap();

    assert_eq!(
        fire(Coordinate::new(2, 3), &mut grid, &mut fleet).unwrap(),
        FireOutcome::Hit
    );
    for row in [0, 1, 3] {
        assert_eq!(
            fire(Coordinate::new(row, 3), &mut grid, &mut fleet).unwrap(),
            FireOutcome::Hit
        );
    }
    assert_eq!(
        fire(Coordinate::new(4, 3), &mut grid, &mut fleet).unwrap(),
        FireOutcome::Sunk(FLEET[0])
    );
    assert_eq!(fleet.ships_afloat(&grid), 0);
}

#[test]
fn test_sinking_one_ship_ignores_neighbours() {
    let mut grid = Grid::new(5).unwrap();
    let mut fleet = Fleet::new();
    fleet
        .place(&mut grid, FLEET[3], Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    fleet
        .place(&mut grid, FLEET[2], Coordinate::new(1, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(fleet.health(), 5);

    // hit the submarine under the destroyer first
    fire(Coordinate::new(1, 0), &mut grid, &mut fleet).unwrap();
    fire(Coordinate::new(1, 1), &mut grid, &mut fleet).unwrap();
    assert_eq!(
        fire(Coordinate::new(0, 0), &mut grid, &mut fleet).unwrap(),
        FireOutcome::Hit
    );
    assert_eq!(
        fire(Coordinate::new(0, 1), &mut grid, &mut fleet).unwrap(),
        FireOutcome::Sunk(FLEET[3])
    );
    assert_eq!(fleet.ships_afloat(&grid), 1);
    assert_eq!(
        fire(Coordinate::new(1, 2), &mut grid, &mut fleet).unwrap(),
        FireOutcome::Sunk(FLEET[2])
    );
    assert_eq!(fleet.health(), 0);
}

#[test]
fn test_outcome_messages() {
    assert_eq!(FireOutcome::Miss.message(), "Miss");
    assert_eq!(FireOutcome::Hit.message(), "Hit");
    assert_eq!(FireOutcome::Sunk(FLEET[1]).message(), "Hit and sunk.");
    assert_eq!(FireOutcome::RepeatHit.message(), "Already been hit.");
    assert!(!FireOutcome::RepeatHit.is_resolved());
    assert!(FireOutcome::Sunk(FLEET[1]).is_hit());
}
