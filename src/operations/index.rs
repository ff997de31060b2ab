//! Serializable summary of an indexing run.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::Schema;
use crate::indexer::IndexResult;

/// What the CLI prints after writing the index.
#[derive(Debug, Clone, Serialize)]
pub struct IndexOutput {
    pub db_path: String,
    pub schema: Schema,
    pub types_indexed: usize,
    pub rows_inserted: usize,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<&'static str, usize>,
}

impl From<IndexResult> for IndexOutput {
    fn from(result: IndexResult) -> Self {
        Self {
            db_path: result.db_path.display().to_string(),
            schema: result.schema,
            types_indexed: result.types_indexed,
            rows_inserted: result.rows_inserted,
            categories: result.categories,
        }
    }
}
