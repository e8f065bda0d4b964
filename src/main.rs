//! CLI for generating a maze and walking it

use std::{thread, time::Duration};

use clap::Parser;
use maze_walker::{Agent, CarveStrategy, Maze, MazeGenerator, MazeGraph};
use tracing::info;

/// Generate a perfect maze and send a wall-following walker through it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width, odd and at least 3
    #[arg(long, default_value_t = 17)]
    width: usize,

    /// Maze height, odd and at least 3
    #[arg(long, default_value_t = 17)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Lattice carving strategy
    #[arg(long, value_enum, default_value_t = CarveStrategy::RandomRestart)]
    strategy: CarveStrategy,

    /// Animate the walker on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 150)]
    frame_length: u64,
}

/// Animate the walker, one step per frame
fn playback(maze: &Maze, frame: Duration) -> anyhow::Result<()> {
    fn print_frame(text: &str) {
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", text);
    }

    let mut agent = Agent::new(maze.entrance);
    print_frame(&maze.render(Some(&agent)));

    while agent.position() != maze.exit {
        thread::sleep(frame);
        agent.tick(frame, frame, &maze.grid, maze.exit)?;
        print_frame(&maze.render(Some(&agent)));
    }
    Ok(())
}

/// Generate maze, print it and the walker's report
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args = Args::parse();

    let maze = MazeGenerator::new(args.seed)
        .strategy(args.strategy)
        .generate_maze(args.width, args.height)?;
    info!(seed = ?maze.seed, width = args.width, height = args.height, "generated maze");

    if args.playback {
        playback(&maze, Duration::from_millis(args.frame_length))?;
    } else {
        println!("{}", maze.render(None));
    }

    let walk = maze.walk()?;
    let graph = MazeGraph::from_grid(&maze.grid);
    if let Some(seed) = maze.seed {
        println!("Seed: {}", seed);
    }
    match graph.shortest_path_len(maze.entrance, maze.exit) {
        Some(shortest) => println!(
            "The walker reached the exit in {} steps; the shortest path is {} steps.",
            walk.steps(),
            shortest
        ),
        None => println!("The walker reached the exit in {} steps.", walk.steps()),
    }
    Ok(())
}
