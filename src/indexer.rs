use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::db::{Database, Schema};
use crate::error::{InvdashError, Result};
use crate::inventory::Inventory;
use crate::mapping::map_type;
use crate::models::OutputRecord;

/// Statistics from an indexing run.
#[derive(Debug, Clone)]
pub struct IndexResult {
    pub db_path: PathBuf,
    pub schema: Schema,
    /// Distinct inventory type tags written.
    pub types_indexed: usize,
    pub rows_inserted: usize,
    /// Rows per docset category.
    pub categories: BTreeMap<&'static str, usize>,
}

/// Map every entry to its output row.
///
/// Fails on the first tag without a category, before anything is written.
pub fn build_records(inventory: &Inventory) -> Result<Vec<OutputRecord<'_>>> {
    let mut records = Vec::with_capacity(inventory.len());
    for (tag, entries) in inventory.groups() {
        let category = map_type(tag)?;
        tracing::debug!(tag, category, count = entries.len(), "mapped type");
        records.extend(entries.iter().map(|entry| OutputRecord::new(entry, category)));
    }
    Ok(records)
}

/// Create `searchIndex` at the configured path and fill it from the inventory.
///
/// All-or-nothing: on failure the transaction is rolled back, and an output
/// file created by this run is removed again.
pub fn run_index(config: &Config, inventory: &Inventory) -> Result<IndexResult> {
    let records = build_records(inventory)?;

    let existed = config.db_path.exists();
    let written = write_index(&config.db_path, config.schema, &records);
    if written.is_err() && !existed {
        remove_partial_output(&config.db_path)?;
    }
    let rows_inserted = written?;

    let mut categories = BTreeMap::new();
    for record in &records {
        *categories.entry(record.category).or_insert(0) += 1;
    }

    let result = IndexResult {
        db_path: config.db_path.clone(),
        schema: config.schema,
        types_indexed: inventory.groups().count(),
        rows_inserted,
        categories,
    };
    tracing::info!(
        path = %result.db_path.display(),
        schema = %result.schema,
        rows = result.rows_inserted,
        "wrote search index"
    );
    Ok(result)
}

fn write_index(path: &Path, schema: Schema, records: &[OutputRecord<'_>]) -> Result<usize> {
    let db = Database::open(path)?;
    if db.search_index_exists()? {
        return Err(InvdashError::IndexExists {
            path: path.display().to_string(),
        });
    }

    // Table creation and inserts share one transaction
    db.conn().execute_batch("BEGIN IMMEDIATE")?;
    let tx_result = (|| -> Result<usize> {
        db.create_search_index(schema)?;
        db.insert_records(schema, records)
    })();
    match &tx_result {
        Ok(_) => db.conn().execute_batch("COMMIT")?,
        Err(_) => {
            let _ = db.conn().execute_batch("ROLLBACK");
        }
    }
    tx_result
}

fn remove_partial_output(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed partial output");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
