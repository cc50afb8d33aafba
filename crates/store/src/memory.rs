//! In-memory score store.

use crate::{ScoreRecord, ScoreStore, StoreError};

/// Score history that lives as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    records: Vec<ScoreRecord>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `scores`, in order.
    pub fn with_scores(scores: impl IntoIterator<Item = u32>) -> Self {
        let mut store = Self::new();
        for score in scores {
            store.push(score);
        }
        store
    }

    fn push(&mut self, score: u32) {
        let id = self.records.len() as i64 + 1;
        self.records.push(ScoreRecord { id, score });
    }
}

impl ScoreStore for MemoryScoreStore {
    fn insert_score(&mut self, score: u32) -> Result<(), StoreError> {
        self.push(score);
        Ok(())
    }

    fn max_score(&self) -> Result<u32, StoreError> {
        Ok(self.records.iter().map(|r| r.score).max().unwrap_or(0))
    }

    fn records(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
