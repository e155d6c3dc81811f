use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Field dimensions must be at least 1")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board counters do not match its cells")]
    InconsistentCounts,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, FieldError>;
