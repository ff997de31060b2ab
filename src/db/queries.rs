use rusqlite::{params, params_from_iter};

use crate::db::connection::Database;
use crate::db::schema::{Schema, TABLE_NAME};
use crate::error::Result;
use crate::models::OutputRecord;

impl Database {
    /// Whether a `searchIndex` table is already present.
    pub fn search_index_exists(&self) -> Result<bool> {
        let count: i64 = self.conn().query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![TABLE_NAME],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Create `searchIndex` with the given layout. Fails if it already exists.
    pub fn create_search_index(&self, schema: Schema) -> Result<()> {
        self.conn().execute_batch(&schema.ddl())?;
        Ok(())
    }

    /// Insert records in the schema's column order. Returns the number of rows.
    pub fn insert_records(&self, schema: Schema, records: &[OutputRecord<'_>]) -> Result<usize> {
        let mut stmt = self.conn().prepare_cached(&schema.insert_sql())?;
        let mut inserted = 0;
        for record in records {
            inserted += stmt.execute(params_from_iter(record.values(schema)))?;
        }
        Ok(inserted)
    }
}
