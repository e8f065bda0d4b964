//! Error types

use thiserror::Error;

/// Errors raised by maze construction, navigation and grid queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height is even or smaller than 3.
    #[error("invalid maze dimensions {width}x{height}: both must be odd and at least 3")]
    InvalidDimensions { width: usize, height: usize },

    /// A state that a correctly generated maze cannot produce.
    #[error("maze invariant violated: {0}")]
    InvariantViolation(String),

    /// Query outside the grid.
    #[error("cell (row={row}, col={col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

impl MazeError {
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
