//! Local persistence for saved reports.
//!
//! Reports live in a single `SQLite` file under the storage root:
//!
//! ```text
//! <root>/
//!   reports.sqlite   # One row per report; the full report is kept as JSON
//! ```
//!
//! The database is opened per operation and the schema is created on first use.

mod report;

use std::{fs, io, path::PathBuf};

use rusqlite::Connection;
use uuid::Uuid;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("report not found: {0}")]
    ReportNotFound(Uuid),

    #[error("report already exists: {0}")]
    ReportAlreadyExists(Uuid),

    #[error("report {0} has non-finite emissions")]
    NonFiniteEmissions(Uuid),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt report store: {0}")]
    Corrupt(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS report (
    id TEXT PRIMARY KEY NOT NULL,
    category TEXT NOT NULL,
    emissions_kg_co2e REAL NOT NULL,
    unit_label TEXT NOT NULL,
    computed_at TEXT NOT NULL,
    payload TEXT NOT NULL
)";

/// Local file-based storage for reports.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.minecarbon/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".minecarbon"))
    }

    fn db_path(&self) -> PathBuf {
        self.root.join("reports.sqlite")
    }

    /// Opens the report database, creating the schema if needed.
    fn open_db(&self) -> Result<Connection> {
        let conn = Connection::open(self.db_path())?;
        conn.execute(SCHEMA, [])?;
        Ok(conn)
    }
}
