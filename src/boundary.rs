//! Entrance and exit selection

use crate::{Grid, MazeError, Point, RandomSource};

/// Entrance on row 0, above a random open cell of row 1.
///
/// Only selects the coordinate; opening it is left to the caller.
pub fn pick_entrance<R: RandomSource>(grid: &Grid, random: &mut R) -> Result<Point, MazeError> {
    let col = pick_open_column(grid, 1, random)?;
    Ok(Point::new(0, col))
}

/// Exit on the last row, below a random open cell of the row above it.
pub fn pick_exit<R: RandomSource>(grid: &Grid, random: &mut R) -> Result<Point, MazeError> {
    let last = grid.height() - 1;
    let scan_row = last
        .checked_sub(1)
        .ok_or_else(|| MazeError::invariant("grid has a single row"))?;
    let col = pick_open_column(grid, scan_row, random)?;
    Ok(Point::new(last, col))
}

fn pick_open_column<R: RandomSource>(
    grid: &Grid,
    row: usize,
    random: &mut R,
) -> Result<usize, MazeError> {
    let free_cols: Vec<usize> = (1..grid.width() - 1)
        .filter(|&col| grid.is_open_at(Point::new(row, col)))
        .collect();

    if free_cols.is_empty() {
        return Err(MazeError::invariant(format!(
            "no open cell on row {} to place a boundary opening next to",
            row
        )));
    }
    Ok(free_cols[random.next_in_range(0, free_cols.len() - 1)])
}
