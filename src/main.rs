#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{cli, init_logging, Ending};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Single-player battleships against a randomly placed fleet.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Board size between 5 and 26 (prompted for when omitted)")]
    size: Option<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = cli::play(&mut stdin.lock(), &mut stdout.lock(), &mut rng, cli.size)?;
    if summary.ending == Some(Ending::FleetDestroyed) {
        log::info!("fleet destroyed in {} shots", summary.shots);
    }
    Ok(())
}
