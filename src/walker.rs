//! Wall-following walker
//!
//! The walker keeps its right hand on the wall: after each step it turns
//! right if it can, otherwise goes straight, otherwise left, and turns back
//! only in a dead end. In a perfect maze this walks the outline of the
//! spanning tree, so starting from the entrance it reaches the exit before
//! it could return to the start.

use std::time::Duration;

use tracing::trace;

use crate::{Direction, Grid, MazeError, Point};

/// Walker position and heading
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Agent {
    position: Point,
    facing: Direction,
    steps: usize,
    /// Total time fed to [Self::tick]
    elapsed: Duration,
}

/// Outcome of a single [advance]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Progress {
    /// Agent moved one cell
    Moved,
    /// Agent already stood on the exit; nothing changed
    AtExit,
}

impl Agent {
    /// Agent standing on `entrance`, facing into the maze.
    pub fn new(entrance: Point) -> Self {
        Self {
            position: entrance,
            facing: Direction::South,
            steps: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Number of cells walked so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Let `dt` pass, stepping once for every whole `interval` elapsed in
    /// total. A zero `interval` steps once per tick.
    ///
    /// Returns the number of cells moved during this tick.
    pub fn tick(
        &mut self,
        dt: Duration,
        interval: Duration,
        grid: &Grid,
        exit: Point,
    ) -> Result<usize, MazeError> {
        let before = self.elapsed;
        self.elapsed += dt;

        let due = if interval.is_zero() {
            1
        } else {
            (self.elapsed.as_nanos() / interval.as_nanos()
                - before.as_nanos() / interval.as_nanos()) as usize
        };

        let mut moved = 0;
        for _ in 0..due {
            match advance(grid, exit, self)? {
                Progress::Moved => moved += 1,
                Progress::AtExit => break,
            }
        }
        Ok(moved)
    }
}

/// Directions to try after a step while facing `facing`, first open wins.
///
/// Right, straight, left, back.
pub fn turn_order(facing: Direction) -> [Direction; 4] {
    [
        facing.turn_right(),
        facing,
        facing.turn_left(),
        facing.turn_back(),
    ]
}

/// First direction of [turn_order] leading from `position` to an open cell.
fn pick_facing(grid: &Grid, position: Point, facing: Direction) -> Result<Direction, MazeError> {
    turn_order(facing)
        .into_iter()
        .find(|&d| grid.open_neighbor(position, d).is_some())
        .ok_or_else(|| {
            MazeError::invariant(format!("walker at {:?} has no open neighbor", position))
        })
}

/// Move the agent one cell and pick its new heading.
///
/// An agent facing a wall turns first. A no-op once the agent is on `exit`.
pub fn advance(grid: &Grid, exit: Point, agent: &mut Agent) -> Result<Progress, MazeError> {
    if agent.position == exit {
        return Ok(Progress::AtExit);
    }

    if grid.open_neighbor(agent.position, agent.facing).is_none() {
        agent.facing = pick_facing(grid, agent.position, agent.facing)?;
    }
    let next = grid
        .open_neighbor(agent.position, agent.facing)
        .ok_or_else(|| MazeError::invariant("turned towards a wall"))?;
    agent.position = next;
    agent.steps += 1;

    if next != exit {
        agent.facing = pick_facing(grid, next, agent.facing)?;
    }

    trace!(position = ?agent.position, facing = ?agent.facing, "walker step");
    Ok(Progress::Moved)
}

/// Positions visited by a walker, from entrance to exit
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Walk {
    pub trail: Vec<Point>,
}

impl Walk {
    pub fn steps(&self) -> usize {
        self.trail.len() - 1
    }
}

/// Walk from `entrance` until `exit`, giving up after `max_steps`.
pub fn walk(
    grid: &Grid,
    entrance: Point,
    exit: Point,
    max_steps: usize,
) -> Result<Walk, MazeError> {
    let mut agent = Agent::new(entrance);
    let mut trail = vec![entrance];

    while advance(grid, exit, &mut agent)? == Progress::Moved {
        trail.push(agent.position);
        if agent.steps > max_steps {
            return Err(MazeError::invariant(format!(
                "walker did not reach the exit within {} steps",
                max_steps
            )));
        }
    }
    Ok(Walk { trail })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{advance, turn_order, walk, Agent, Progress};
    use crate::{Direction, Grid, MazeError, Point};

    use Direction::*;

    fn corridor_maze() -> Grid {
        Grid::parse(
            "
#.#####
#.#...#
#.#.#.#
#...#.#
#####.#"
                .trim(),
        )
        .unwrap()
    }

    #[test]
    fn turn_order_by_facing() {
        assert_eq!(turn_order(North), [East, North, West, South]);
        assert_eq!(turn_order(East), [South, East, North, West]);
        assert_eq!(turn_order(South), [West, South, East, North]);
        assert_eq!(turn_order(West), [North, West, South, East]);
    }

    #[test]
    fn follows_single_corridor() {
        let grid = corridor_maze();
        let walk = walk(&grid, Point::new(0, 1), Point::new(4, 5), 100).unwrap();

        let expected: Vec<Point> = [
            (0, 1),
            (1, 1),
            (2, 1),
            (3, 1),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 5),
            (3, 5),
            (4, 5),
        ]
        .into_iter()
        .map(|(r, c)| Point::new(r, c))
        .collect();
        assert_eq!(walk.trail, expected);
        assert_eq!(walk.steps(), 12);
    }

    #[test]
    fn explores_dead_end_and_returns() {
        // Right-hand rule enters the western dead end first.
        let grid = Grid::parse(
            "
###.###
#.....#
###.###
###.###
###.###"
                .trim(),
        )
        .unwrap();
        let walk = walk(&grid, Point::new(0, 3), Point::new(4, 3), 100).unwrap();

        let cols_on_row_1: Vec<usize> = walk
            .trail
            .iter()
            .filter(|p| p.row == 1)
            .map(|p| p.col)
            .collect();
        assert_eq!(cols_on_row_1, vec![3, 2, 1, 2, 3]);
        assert_eq!(walk.trail.last(), Some(&Point::new(4, 3)));
        assert_eq!(walk.steps(), 8);
    }

    #[test]
    fn advance_is_noop_at_exit() {
        let grid = Grid::parse("#.#\n#.#\n#.#").unwrap();
        let exit = Point::new(2, 1);
        let mut agent = Agent::new(Point::new(0, 1));

        assert_eq!(advance(&grid, exit, &mut agent), Ok(Progress::Moved));
        assert_eq!(advance(&grid, exit, &mut agent), Ok(Progress::Moved));
        assert_eq!(agent.position(), exit);

        let settled = agent.clone();
        assert_eq!(advance(&grid, exit, &mut agent), Ok(Progress::AtExit));
        assert_eq!(agent, settled);
        assert_eq!(agent.steps(), 2);
    }

    #[test]
    fn walled_in_agent_is_an_invariant_violation() {
        let grid = Grid::parse("###\n#.#\n###").unwrap();
        let mut agent = Agent::new(Point::new(1, 1));
        assert!(matches!(
            advance(&grid, Point::new(2, 1), &mut agent),
            Err(MazeError::InvariantViolation(_))
        ));
    }

    #[test]
    fn isolated_agent_stays_in_place() {
        let grid = Grid::parse("#.#\n###").unwrap();
        let mut agent = Agent::new(Point::new(0, 1));
        assert!(matches!(
            advance(&grid, Point::new(1, 1), &mut agent),
            Err(MazeError::InvariantViolation(_))
        ));
        assert_eq!(agent.position(), Point::new(0, 1));
        assert_eq!(agent.steps(), 0);
    }

    #[test]
    fn facing_wall_turns_before_stepping() {
        let grid = Grid::parse("#####\n#...#\n#####").unwrap();
        let exit = Point::new(1, 3);
        let mut agent = Agent::new(Point::new(1, 1));
        assert_eq!(agent.facing(), South);

        assert_eq!(advance(&grid, exit, &mut agent), Ok(Progress::Moved));
        assert_eq!(agent.position(), Point::new(1, 2));
        assert_eq!(agent.facing(), East);

        assert_eq!(advance(&grid, exit, &mut agent), Ok(Progress::Moved));
        assert_eq!(agent.position(), exit);
        assert_eq!(agent.steps(), 2);
    }

    #[test]
    fn walk_gives_up_after_max_steps() {
        let grid = corridor_maze();
        let res = walk(&grid, Point::new(0, 1), Point::new(4, 5), 5);
        assert!(matches!(res, Err(MazeError::InvariantViolation(_))));
    }

    #[test]
    fn tick_steps_once_per_interval() {
        let grid = corridor_maze();
        let exit = Point::new(4, 5);
        let interval = Duration::from_millis(100);
        let mut agent = Agent::new(Point::new(0, 1));

        assert_eq!(
            agent.tick(Duration::from_millis(60), interval, &grid, exit),
            Ok(0)
        );
        assert_eq!(
            agent.tick(Duration::from_millis(60), interval, &grid, exit),
            Ok(1)
        );
        assert_eq!(
            agent.tick(Duration::from_millis(250), interval, &grid, exit),
            Ok(2)
        );
        assert_eq!(agent.steps(), 3);
        assert_eq!(agent.elapsed(), Duration::from_millis(370));

        // Far more time than needed: stops at the exit
        assert_eq!(
            agent.tick(Duration::from_secs(10), interval, &grid, exit),
            Ok(9)
        );
        assert_eq!(agent.position(), exit);
        assert_eq!(agent.tick(Duration::ZERO, Duration::ZERO, &grid, exit), Ok(0));
    }
}
