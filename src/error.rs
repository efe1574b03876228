use std::fmt;

use thiserror::Error;

use crate::puzzle::Direction;

pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Errors raised at the boundary of the search core: parsing, validation,
/// configuration and I/O. Search outcomes are never reported through this type.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Illegal move: cannot move the blank {direction} from row {row}, column {col}")]
    IllegalMove {
        direction: Direction,
        row: usize,
        col: usize,
    },

    #[error("invalid dimension {0}: boards must be at least 2x2")]
    InvalidDimension(usize),

    #[error("expected {expected} cells for the board, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("tile {tile} is out of range for a {dimension}x{dimension} board")]
    TileOutOfRange { tile: u32, dimension: usize },

    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),

    #[error("board has no blank cell")]
    MissingBlank,

    #[error("start is {start}x{start} but goal is {goal}x{goal}")]
    DimensionMismatch { start: usize, goal: usize },

    #[error("dimension is declared as {declared} but start is {found}x{found}")]
    DeclaredDimension { declared: usize, found: usize },

    #[error("parse error{}: {message}", LineSuffix(.line))]
    Parse { line: Option<usize>, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PuzzleError {
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            line: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse {
                line: Some(line),
                message,
            },
            other => Self::Parse {
                line: Some(line),
                message: other.to_string(),
            },
        }
    }
}

struct LineSuffix<'a>(&'a Option<usize>);

impl fmt::Display for LineSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(line) => write!(f, " on line {line}"),
            None => Ok(()),
        }
    }
}
