use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrillError {
    #[error("unknown difficulty '{0}', expected Easy, Medium or Hard")]
    UnknownDifficulty(String),
    #[error("difficulty index must be 0, 1 or 2, got {0}")]
    InvalidLevelIndex(usize),
    #[error("failed to write question log: {0}")]
    Io(#[from] std::io::Error),
}
