//! Grid of floor and wall cells

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use itertools::Itertools;

use crate::MazeError;

/// Location in the grid
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Adjacent point in `direction`, or `None` when it would leave the
    /// non-negative quadrant. The upper bounds are checked by [Grid].
    pub fn neighbor(self, direction: Direction) -> Option<Point> {
        let (dr, dc) = direction.delta();
        Some(Point {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

/// Compass direction on the grid; North is row 0.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit (row, col) step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Arrow pointing this way, for drawing a walker
    pub fn arrow(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn turn_back(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Rectangular field of cells, `true` being floor and `false` wall.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    const S_FLOOR: char = '.';
    const S_WALL: char = '#';

    /// Grid of walls with maze dimensions: both odd and at least 3.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Parse the text form: `.` for floor, `#` for wall, one line per row.
    ///
    /// Any rectangular, non-empty layout is accepted; it need not be a maze.
    ///
    /// # Examples
    /// ```
    /// use maze_walker::Grid;
    /// let grid = Grid::parse("#.#\n#.#\n#.#").unwrap();
    /// assert!(grid.is_open(1, 1).unwrap());
    /// assert!(!grid.is_open(1, 0).unwrap());
    /// ```
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let rows: Vec<Vec<char>> = text.lines().map(|row| row.chars().collect()).collect();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            bail!("Grid is empty");
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            if line.len() != width {
                bail!(
                    "Row {} has {} cells, expected {}",
                    row,
                    line.len(),
                    width
                );
            }
            for (col, c) in line.iter().enumerate() {
                match *c {
                    Self::S_FLOOR => cells.push(true),
                    Self::S_WALL => cells.push(false),
                    val => {
                        return Err(anyhow!(
                            "Unexpected character `{}` at row={}, col={}",
                            val,
                            row,
                            col
                        ))
                    }
                }
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at (`row`, `col`) is floor.
    ///
    /// Returns [MazeError::OutOfBounds] outside the grid.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, MazeError> {
        if !self.contains(Point { row, col }) {
            return Err(MazeError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.cells[self.idx(row, col)])
    }

    /// Like [Self::is_open], treating cells outside the grid as walls.
    pub fn is_open_at(&self, point: Point) -> bool {
        self.contains(point) && self.cells[self.idx(point.row, point.col)]
    }

    /// Open neighbor of `point` in `direction`, if any.
    pub fn open_neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        point
            .neighbor(direction)
            .filter(|&next| self.is_open_at(next))
    }

    /// All open cells, row by row
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(row, col)| Point { row, col })
            .filter(|&p| self.is_open_at(p))
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.height && point.col < self.width
    }

    pub(crate) fn open(&mut self, point: Point) {
        let i = self.idx(point.row, point.col);
        self.cells[i] = true;
    }

    /// Text form of a single row
    pub(crate) fn render_row(&self, row: usize) -> Vec<char> {
        (0..self.width)
            .map(|col| {
                if self.cells[self.idx(row, col)] {
                    Self::S_FLOOR
                } else {
                    Self::S_WALL
                }
            })
            .collect()
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl FromStr for Grid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = (0..self.height)
            .map(|row| self.render_row(row).into_iter().join(""))
            .join("\n");
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Grid, Point};
    use crate::MazeError;

    #[test]
    fn rejects_even_or_small_dimensions() {
        for (w, h) in [(4, 5), (5, 4), (1, 5), (5, 1), (0, 0), (2, 2)] {
            assert_eq!(
                Grid::new(w, h),
                Err(MazeError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
        assert!(Grid::new(3, 3).is_ok());
        assert!(Grid::new(5, 7).is_ok());
    }

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new(5, 7).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.open_cells().count(), 0);
    }

    #[test]
    fn is_open_is_bounds_checked() {
        let grid = Grid::parse("###\n#.#\n###").unwrap();
        assert_eq!(grid.is_open(1, 1), Ok(true));
        assert_eq!(grid.is_open(0, 2), Ok(false));
        assert_eq!(
            grid.is_open(3, 0),
            Err(MazeError::OutOfBounds {
                row: 3,
                col: 0,
                height: 3,
                width: 3
            })
        );
        assert!(grid.is_open(0, 3).is_err());
    }

    #[test]
    fn outside_cells_count_as_walls() {
        let grid = Grid::parse(".#\n..").unwrap();
        let corner = Point::new(0, 0);
        assert_eq!(grid.open_neighbor(corner, Direction::North), None);
        assert_eq!(grid.open_neighbor(corner, Direction::West), None);
        assert_eq!(grid.open_neighbor(corner, Direction::East), None);
        assert_eq!(
            grid.open_neighbor(corner, Direction::South),
            Some(Point::new(1, 0))
        );
        assert!(!grid.is_open_at(Point::new(2, 0)));
    }

    #[test]
    fn parse_and_display_agree() {
        let text = "#.###\n#...#\n###.#";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
        assert_eq!(grid.open_cells().count(), 5);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Grid::parse("").is_err());
        assert!(Grid::parse("##\n#").is_err());
        assert!(Grid::parse("#x#").is_err());
    }

    #[test]
    fn turns_are_consistent() {
        for d in Direction::ALL {
            assert_eq!(d.turn_right().turn_left(), d);
            assert_eq!(d.turn_right().turn_right(), d.turn_back());
            let (dr, dc) = d.delta();
            assert_eq!(d.turn_back().delta(), (-dr, -dc));
        }
    }

    #[test]
    fn arrows_point_along_direction() {
        let arrows: Vec<char> = Direction::ALL.iter().map(|d| d.arrow()).collect();
        assert_eq!(arrows, vec!['^', 'v', '<', '>']);
    }
}
