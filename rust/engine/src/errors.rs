use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("move set needs an odd number of at least 3 moves, got {0}")]
    InvalidMoveCount(usize),
    #[error("duplicate move name: {0}")]
    DuplicateMove(String),
    #[error("unknown move: {0}")]
    UnknownMove(String),
    #[error("move index {index} out of range for {len} moves")]
    MoveOutOfRange { index: usize, len: usize },
    #[error("bad key encoding: {0}")]
    KeyEncoding(String),
    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}
