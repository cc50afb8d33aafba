//! Score store - durable history of scores and the running maximum.
//!
//! The store is append-only: the game appends one row per line-clear event
//! and reads back the maximum at startup. Nothing is ever updated or deleted.
//!
//! - [`SqliteScoreStore`]: on-disk `scores(id, score)` table
//! - [`MemoryScoreStore`]: process-lifetime store for tests and `--memory` play
//!
//! # Example
//!
//! ```
//! use tetromino_store::{ScoreStore, SqliteScoreStore};
//!
//! let mut store = SqliteScoreStore::open_in_memory().unwrap();
//! assert_eq!(store.max_score().unwrap(), 0);
//!
//! for score in [50, 200, 75] {
//!     store.insert_score(score).unwrap();
//! }
//! assert_eq!(store.max_score().unwrap(), 200);
//! ```

pub mod error;
pub mod memory;
pub mod sqlite;

pub use error::StoreError;
pub use memory::MemoryScoreStore;
pub use sqlite::{SqliteScoreStore, DEFAULT_DB_PATH};

/// One persisted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub id: i64,
    pub score: u32,
}

/// Append-only score history.
pub trait ScoreStore {
    /// Append a score row
    fn insert_score(&mut self, score: u32) -> Result<(), StoreError>;

    /// Highest recorded score, 0 when nothing is recorded
    fn max_score(&self) -> Result<u32, StoreError>;

    /// All rows in insertion order
    fn records(&self) -> Result<Vec<ScoreRecord>, StoreError>;

    /// Release the underlying resource, reporting any failure.
    ///
    /// Dropping a store also releases it, silently.
    fn close(self) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        Ok(())
    }

    /// [`close`](Self::close) for stores behind a `Box<dyn ScoreStore>`.
    ///
    /// Stores with a fallible `close` forward it here.
    fn close_boxed(self: Box<Self>) -> Result<(), StoreError> {
        Ok(())
    }
}

impl<T: ScoreStore + ?Sized> ScoreStore for Box<T> {
    fn insert_score(&mut self, score: u32) -> Result<(), StoreError> {
        (**self).insert_score(score)
    }

    fn max_score(&self) -> Result<u32, StoreError> {
        (**self).max_score()
    }

    fn records(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        (**self).records()
    }

    fn close(self) -> Result<(), StoreError> {
        T::close_boxed(self)
    }

    fn close_boxed(self: Box<Self>) -> Result<(), StoreError> {
        T::close_boxed(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StuckStore;

    impl ScoreStore for StuckStore {
        fn insert_score(&mut self, _score: u32) -> Result<(), StoreError> {
            Ok(())
        }

        fn max_score(&self) -> Result<u32, StoreError> {
            Ok(0)
        }

        fn records(&self) -> Result<Vec<ScoreRecord>, StoreError> {
            Ok(Vec::new())
        }

        fn close(self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("still busy".into()))
        }

        fn close_boxed(self: Box<Self>) -> Result<(), StoreError> {
            (*self).close()
        }
    }

    #[test]
    fn boxed_close_reports_failure() {
        let store: Box<dyn ScoreStore> = Box::new(StuckStore);
        assert!(matches!(store.close(), Err(StoreError::Unavailable(_))));

        let nested: Box<Box<dyn ScoreStore>> = Box::new(Box::new(StuckStore));
        assert!(nested.close().is_err());
    }

    #[test]
    fn boxed_close_of_healthy_stores() {
        let memory: Box<dyn ScoreStore> = Box::new(MemoryScoreStore::new());
        assert!(memory.close().is_ok());

        let sqlite: Box<dyn ScoreStore> = Box::new(SqliteScoreStore::open_in_memory().unwrap());
        assert!(sqlite.close().is_ok());
    }
}
