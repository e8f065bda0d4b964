//! Generate a perfect maze and let a walker find its way out
//!
//! A maze is carved on a grid with odd dimensions: cells with both
//! coordinates odd are always floor, and the corridors between them form a
//! spanning tree, so there is exactly one path between any two open cells.
//! One opening is made on the top row (entrance) and one on the bottom row
//! (exit). The walker then follows the right-hand wall from the entrance
//! until it stands on the exit.
//!
//! Generation is fully determined by the seed.
//!
//! # Examples
//! ```
//! use maze_walker::{generate, MazeGraph};
//!
//! let maze = generate(17, 17, Some(2024)).unwrap();
//! assert_eq!(maze, generate(17, 17, Some(2024)).unwrap());
//!
//! let walk = maze.walk().unwrap();
//! assert_eq!(walk.trail.last(), Some(&maze.exit));
//!
//! let graph = MazeGraph::from_grid(&maze.grid);
//! assert!(graph.is_perfect());
//! assert!(graph.shortest_path_len(maze.entrance, maze.exit).unwrap() <= walk.steps());
//! ```
//!
//! ## Stepping the walker
//! ```
//! use maze_walker::{advance, generate, Agent, Progress};
//!
//! let maze = generate(9, 9, Some(7)).unwrap();
//! let mut agent = Agent::new(maze.entrance);
//! while advance(&maze.grid, maze.exit, &mut agent).unwrap() == Progress::Moved {}
//! assert_eq!(agent.position(), maze.exit);
//! ```

use itertools::Itertools;

pub mod boundary;
mod error;
mod grid;
pub mod maze_generator;
mod random;
pub mod topology;
pub mod walker;

pub use error::MazeError;
pub use grid::{Direction, Grid, Point};
pub use maze_generator::{CarveStrategy, MazeGenerator};
pub use random::{RandomSource, SeededRandom};
pub use topology::MazeGraph;
pub use walker::{advance, Agent, Progress, Walk};

/// Generated maze with its openings
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Maze {
    pub grid: Grid,
    /// Opening on row 0
    pub entrance: Point,
    /// Opening on the last row
    pub exit: Point,
    /// Seed that reproduces this maze, if generated from one
    pub seed: Option<u64>,
}

/// Generate a `width` x `height` maze with the default strategy.
///
/// Without a seed, one is drawn from entropy and recorded in [Maze::seed].
pub fn generate(width: usize, height: usize, seed: Option<u64>) -> Result<Maze, MazeError> {
    MazeGenerator::new(seed).generate_maze(width, height)
}

impl Maze {
    const S_ENTRANCE: char = 'E';
    const S_EXIT: char = 'X';

    /// Whether the cell at (`row`, `col`) is floor; see [Grid::is_open].
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, MazeError> {
        self.grid.is_open(row, col)
    }

    /// Walk from entrance to exit with the wall-following walker.
    ///
    /// A walker on a perfect maze passes each corridor at most twice, so
    /// taking more steps than twice the open cells means the maze is broken.
    pub fn walk(&self) -> Result<Walk, MazeError> {
        let max_steps = 2 * self.grid.open_cells().count();
        walker::walk(&self.grid, self.entrance, self.exit, max_steps)
    }

    /// Text form of the grid, with entrance, exit and optionally the agent
    /// marked by an arrow showing where it faces.
    pub fn render(&self, agent: Option<&Agent>) -> String {
        let agent = agent.map(|a| (a.position(), a.facing().arrow()));
        (0..self.grid.height())
            .map(|row| {
                let mut line = self.grid.render_row(row);
                for (p, symbol) in [
                    Some((self.entrance, Self::S_ENTRANCE)),
                    Some((self.exit, Self::S_EXIT)),
                    agent,
                ]
                .into_iter()
                .flatten()
                {
                    if p.row == row && p.col < line.len() {
                        line[p.col] = symbol;
                    }
                }
                line.into_iter().join("")
            })
            .join("\n")
    }
}
