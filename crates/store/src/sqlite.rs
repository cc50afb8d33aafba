//! SQLite-backed score store.

use std::path::Path;

use log::debug;
use rusqlite::{params, Connection};

use crate::{ScoreRecord, ScoreStore, StoreError};

/// Default database file name, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "tetris_scores.db";

/// Score history in a `scores(id INTEGER PRIMARY KEY, score INTEGER NOT NULL)` table.
pub struct SqliteScoreStore {
    connection: Connection,
}

impl SqliteScoreStore {
    /// Open (or create) the database at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!("opening score database {}", path.display());
        Self::from_connection(Connection::open(path)?)
    }

    /// Private database that disappears when the store is dropped
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(connection: Connection) -> Result<Self, StoreError> {
        let store = Self { connection };
        store.create_table()?;
        Ok(store)
    }

    /// Create the scores table if it does not exist yet
    fn create_table(&self) -> Result<(), StoreError> {
        self.connection.execute(
            r#"
            CREATE TABLE IF NOT EXISTS scores (
                id INTEGER PRIMARY KEY,
                score INTEGER NOT NULL
            )
            "#,
            [],
        )?;
        Ok(())
    }
}

fn to_score(value: i64) -> Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| StoreError::InvalidScore(value))
}

impl ScoreStore for SqliteScoreStore {
    fn insert_score(&mut self, score: u32) -> Result<(), StoreError> {
        self.connection.execute(
            "INSERT INTO scores (score) VALUES (?1)",
            params![i64::from(score)],
        )?;
        debug!("recorded score {}", score);
        Ok(())
    }

    fn max_score(&self) -> Result<u32, StoreError> {
        let max: Option<i64> =
            self.connection
                .query_row("SELECT MAX(score) FROM scores", [], |row| row.get(0))?;
        max.map(to_score).unwrap_or(Ok(0))
    }

    fn records(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        let mut stmt = self
            .connection
            .prepare("SELECT id, score FROM scores ORDER BY id")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;

        let mut records = Vec::new();
        for row in rows {
            let (id, score) = row?;
            records.push(ScoreRecord {
                id,
                score: to_score(score)?,
            });
        }
        Ok(records)
    }

    fn close(self) -> Result<(), StoreError> {
        self.connection.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }

    fn close_boxed(self: Box<Self>) -> Result<(), StoreError> {
        (*self).close()
    }
}
