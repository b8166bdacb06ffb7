use thiserror::Error;

use crate::grid::Position;

/// Errors raised while loading or validating a board.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("failed to read board file: {0}")]
    Io(#[from] std::io::Error),

    #[error("board is empty")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown terrain symbol '{symbol}' at {position}")]
    UnknownSymbol { symbol: char, position: Position },

    #[error("board has no '{0}' cell")]
    Missing(char),

    #[error("board has more than one '{0}' cell")]
    Duplicate(char),
}

/// Errors raised while reconstructing a path from a predecessor map.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("no path from {start} to {goal}")]
    Unreachable { start: Position, goal: Position },
}
