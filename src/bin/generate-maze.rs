//! CLI for maze generation

use clap::Parser;
use maze_walker::{CarveStrategy, MazeGenerator};
use tracing::info;

/// Print a perfect maze as text: `.` for floor, `#` for wall
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated maze height, odd and at least 3
    #[arg(long, default_value_t = 17)]
    height: usize,

    /// Generated maze width, odd and at least 3
    #[arg(long, default_value_t = 17)]
    width: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Lattice carving strategy
    #[arg(long, value_enum, default_value_t = CarveStrategy::RandomRestart)]
    strategy: CarveStrategy,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args = Args::parse();

    let maze = MazeGenerator::new(args.seed)
        .strategy(args.strategy)
        .generate_maze(args.width, args.height)?;
    info!(seed = ?maze.seed, "generated maze");

    println!("{}", maze.grid);
    Ok(())
}
