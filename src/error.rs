use thiserror::Error;

/// Errors raised when building or mutating a board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("cell ({row}, {col}) is not adjacent to the empty cell")]
    InvalidMove { row: usize, col: usize },
    #[error("tile {0} is outside the range 0..=8")]
    InvalidTile(u8),
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
    #[error("auto-play in progress")]
    Busy,
}

/// Outcomes of the optimal solver that do not produce a path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("puzzle is not solvable")]
    Unsolvable,
    #[error("search gave up after {iterations} iterations")]
    Exhausted { iterations: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
