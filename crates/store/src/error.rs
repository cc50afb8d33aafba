use thiserror::Error;

/// Failure reaching or reading the score store.
///
/// These are the only real faults in the game; everything else is an
/// expected game-logic outcome.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored score {0} is out of range")]
    InvalidScore(i64),
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}
