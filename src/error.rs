use thiserror::Error;

/// Error types for the ant simulation
#[derive(Debug, Error)]
pub enum Error {
    /// The board could not be allocated (or its doubled size does not fit)
    #[error("cannot allocate a {rows}x{cols} board")]
    Allocation { rows: usize, cols: usize },

    /// Checked cell or ant access outside the current board
    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid token in a world description
    #[error("Invalid line: {0}")]
    InvalidLine(String),

    /// Invalid direction token
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    /// World description ended early
    #[error("Unexpected end of input: missing {0}")]
    UnexpectedEof(&'static str),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
