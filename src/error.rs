use thiserror::Error;

use crate::grid::Direction;
use crate::TermInt;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    /// A step was attempted that the move validator would have rejected.
    #[error("illegal move {direction:?}: step called without a successful validation")]
    InvalidMove { direction: Direction },

    #[error("no free cell left in the grid to place a cherry")]
    ExhaustedSpawnSpace,

    #[error("a {height}x{width} grid is too small, need at least 5 rows and 12 columns")]
    GridTooSmall { height: TermInt, width: TermInt },

    #[error("terminal is {actual_width} columns by {actual_height} rows, the game needs {width} by {height}")]
    TerminalTooSmall {
        width: TermInt,
        height: TermInt,
        actual_width: TermInt,
        actual_height: TermInt,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
