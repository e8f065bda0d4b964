//! Maze generation

use tracing::debug;

use crate::boundary::{pick_entrance, pick_exit};
use crate::{Direction, Grid, Maze, MazeError, Point, RandomSource, SeededRandom};

/// How the generator walks the lattice of odd cells.
///
/// The two strategies consume random numbers differently, so a seed gives
/// different mazes under each.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum CarveStrategy {
    /// Carve forward until stuck, then restart from a uniformly random
    /// lattice node, repeating until every node is connected.
    #[default]
    RandomRestart,
    /// Depth-first search with an explicit stack of carve cursors.
    Backtracking,
}

/// Perfect maze generator.
pub struct MazeGenerator<R = SeededRandom> {
    random: R,
    strategy: CarveStrategy,
}

impl MazeGenerator<SeededRandom> {
    /// Generator seeded with `seed`, or from entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_random(SeededRandom::new(seed))
    }
}

impl<R: RandomSource> MazeGenerator<R> {
    pub fn with_random(random: R) -> Self {
        Self {
            random,
            strategy: CarveStrategy::default(),
        }
    }

    pub fn strategy(mut self, strategy: CarveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Generate a perfect maze with an entrance on the top row and an exit
    /// on the bottom row.
    ///
    /// Both dimensions must be odd and at least 3.
    pub fn generate_maze(&mut self, width: usize, height: usize) -> Result<Maze, MazeError> {
        let mut grid = self.carve(width, height)?;

        let entrance = pick_entrance(&grid, &mut self.random)?;
        grid.open(entrance);
        let exit = pick_exit(&grid, &mut self.random)?;
        grid.open(exit);

        debug!(
            seed = ?self.random.seed(),
            ?entrance,
            ?exit,
            "maze ready"
        );
        Ok(Maze {
            grid,
            entrance,
            exit,
            seed: self.random.seed(),
        })
    }

    /// Carve the maze body, without entrance and exit.
    ///
    /// Every lattice node (both coordinates odd) ends up open, joined by
    /// corridors so that the open cells form a spanning tree.
    pub fn carve(&mut self, width: usize, height: usize) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(width, height)?;
        match self.strategy {
            CarveStrategy::RandomRestart => self.carve_with_restarts(&mut grid),
            CarveStrategy::Backtracking => self.carve_with_stack(&mut grid),
        }
        Ok(grid)
    }

    /// Random walk from random open nodes until all nodes are joined.
    ///
    /// A stuck cursor is abandoned rather than backed up; restarts may land
    /// on closed or fully surrounded nodes and make no progress.
    fn carve_with_restarts(&mut self, grid: &mut Grid) {
        let node_count = (grid.height() - 1) * (grid.width() - 1) / 4;
        let mut directions = Direction::ALL;
        let mut done = 0;
        let mut restarts = 0usize;

        loop {
            let mut cursor = self.random_node(grid);
            if done == 0 {
                grid.open(cursor);
            }

            if grid.is_open_at(cursor) {
                self.random.shuffle(&mut directions);
                loop {
                    if self.random.next_in_range(0, 4) == 0 {
                        self.random.shuffle(&mut directions);
                    }
                    match Self::carve_step(grid, cursor, &directions) {
                        Some(next) => {
                            cursor = next;
                            done += 1;
                        }
                        None => break,
                    }
                }
            }
            restarts += 1;

            if done + 1 >= node_count {
                break;
            }
        }
        debug!(nodes = node_count, restarts, "carved maze with random restarts");
    }

    fn carve_with_stack(&mut self, grid: &mut Grid) {
        let mut directions = Direction::ALL;
        let start = self.random_node(grid);
        grid.open(start);

        let mut stack = vec![start];
        while let Some(&cursor) = stack.last() {
            self.random.shuffle(&mut directions);
            match Self::carve_step(grid, cursor, &directions) {
                Some(next) => stack.push(next),
                None => {
                    stack.pop();
                }
            }
        }
        debug!("carved maze with backtracking");
    }

    /// Uniformly random lattice node
    fn random_node(&mut self, grid: &Grid) -> Point {
        let row = 1 + self.random.next_in_range(0, (grid.height() - 1) / 2 - 1) * 2;
        let col = 1 + self.random.next_in_range(0, (grid.width() - 1) / 2 - 1) * 2;
        Point::new(row, col)
    }

    /// Open the first closed interior node two cells away from `from`,
    /// trying `directions` in order, together with the corridor cell between.
    fn carve_step(grid: &mut Grid, from: Point, directions: &[Direction]) -> Option<Point> {
        let (corridor, target) = directions.iter().find_map(|&d| {
            let corridor = from.neighbor(d)?;
            let target = corridor.neighbor(d)?;
            let interior = target.row >= 1
                && target.row < grid.height() - 1
                && target.col >= 1
                && target.col < grid.width() - 1;
            (interior && !grid.is_open_at(target)).then_some((corridor, target))
        })?;

        grid.open(target);
        grid.open(corridor);
        Some(target)
    }
}
