use battleships::{Coordinate, Game};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

/// Plays a game by firing at every cell in shuffled order and prints the
/// summary as JSON.
fn main() -> anyhow::Result<()> {
    battleships::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => 10,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::setup(size, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut targets: Vec<Coordinate> = game.grid().coordinates().collect();
    targets.shuffle(&mut rng);
    for coord in targets {
        if game.is_over() {
            break;
        }
        game.fire(coord).map_err(|e| anyhow::anyhow!(e))?;
    }

    let summary = game.summary();
    let result = json!({
        "seed": seed,
        "summary": summary,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
