use anyhow::{Context, Result, ensure};
use clap::Parser;
use maze_core::{CellState, Direction, GameSession, SessionConfig, StepOutcome};
use maze_core::session::{DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH};
use maze_tools::format_fingerprint;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Random-walk soak run over a game session.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short = 'n', long, default_value_t = 100_000)]
    steps: u32,
    #[arg(long, default_value_t = DEFAULT_MAZE_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_MAZE_HEIGHT)]
    height: usize,
}

fn choose(rng: &mut ChaCha8Rng) -> Direction {
    let p = rng.next_u64() as usize % Direction::ALL.len();
    Direction::ALL[p]
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting walk on seed {} for max {} steps...", args.seed, args.steps);
    let config = SessionConfig { width: args.width, height: args.height };
    let mut session = GameSession::new(args.seed, config)
        .with_context(|| format!("Failed to start a {}x{} session", args.width, args.height))?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut blocked = 0_u32;
    for step in 0..args.steps {
        match session.step(choose(&mut rng)) {
            StepOutcome::Moved { .. } => {}
            StepOutcome::Blocked => blocked += 1,
            StepOutcome::MazeCompleted { mazes_completed } => {
                println!("Maze {mazes_completed} completed after {step} steps");
            }
        }

        // Assert invariants
        let player = session.player();
        ensure!(
            session.maze().tile_at(player) == CellState::Open,
            "Invariant failed: player inside wall at {player:?} on step {step}"
        );
    }

    println!(
        "Walk completed: {} mazes, {} blocked steps, snapshot {}",
        session.mazes_completed(),
        blocked,
        format_fingerprint(session.snapshot_hash())
    );
    Ok(())
}
