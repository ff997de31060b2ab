use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

/// Database wrapper for a docset search index.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the docset database at the given path.
    ///
    /// No table is created here; see [`Database::create_search_index`].
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        // Docsets ship as a single file, so keep the rollback journal (no WAL sidecars).
        conn.execute_batch(
            "PRAGMA synchronous=NORMAL;\
             PRAGMA temp_store=MEMORY;",
        )?;
        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Access the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
