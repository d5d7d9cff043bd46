//! Local persistence for calculation records and the game scoreboard.
//!
//! Everything lives in one `SQLite` file under the storage root:
//!
//! ```text
//! <root>/cycles.sqlite
//!   records      # history and favorites, one row per record
//!   scoreboard   # single row, game totals as JSON
//! ```
//!
//! Callers work against the [`RecordStore`] and [`ScoreStore`] traits so the
//! backing store can be swapped; [`MemoryStore`] is the in-process alternative. [`Journal`] layers
//! the bounded, most-recent-first policy on top of any store.

mod journal;
mod memory;
mod records;
mod scoreboard;

use std::{fs, io, path::PathBuf};

use rusqlite::Connection;
use uuid::Uuid;

use crate::game::Scoreboard;
use crate::model::{Record, Shelf};

pub use journal::Journal;
pub use memory::MemoryStore;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("record not found: {0}")]
    RecordNotFound(Uuid),

    #[error("no record matching '{0}'")]
    NoMatch(String),

    #[error("'{reference}' is ambiguous; matches {}: {}", .matches.len(), .matches.join(", "))]
    Ambiguous {
        reference: String,
        matches: Vec<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("corrupt data: {0}")]
    Corrupt(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// An ordered list of records per shelf, most recent first.
pub trait RecordStore {
    /// All records on `shelf`, most recent first.
    fn list(&self, shelf: Shelf) -> Result<Vec<Record>>;

    fn get(&self, shelf: Shelf, id: Uuid) -> Result<Record>;

    /// Stores `record` as the most recent on `shelf`.
    /// A record with the same id is replaced.
    fn put(&self, shelf: Shelf, record: &Record) -> Result<()>;

    fn delete(&self, shelf: Shelf, id: Uuid) -> Result<()>;

    /// Removes every record on `shelf`, returning how many were removed.
    fn clear(&self, shelf: Shelf) -> Result<usize>;
}

/// Persistent game totals.
pub trait ScoreStore {
    /// The saved scoreboard, or an empty one if nothing was saved yet.
    fn load_scoreboard(&self) -> Result<Scoreboard>;

    fn save_scoreboard(&self, scoreboard: &Scoreboard) -> Result<()>;
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS records (
        seq          INTEGER PRIMARY KEY AUTOINCREMENT,
        id           TEXT NOT NULL,
        shelf        TEXT NOT NULL,
        input_number TEXT NOT NULL,
        power        INTEGER NOT NULL,
        result       TEXT NOT NULL,
        added_at     TEXT NOT NULL,
        UNIQUE (shelf, id)
    );
    CREATE TABLE IF NOT EXISTS scoreboard (
        id   INTEGER PRIMARY KEY CHECK (id = 1),
        data TEXT NOT NULL
    );
";

/// `SQLite`-backed storage.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the database under the given root directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let conn = Connection::open(root.join("cycles.sqlite"))?;
        conn.execute_batch(SCHEMA)?;
        tracing::debug!(root = %root.display(), "opened storage");
        Ok(Self { conn })
    }

    /// Returns the default storage root: `~/.cycles/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".cycles"))
    }
}
