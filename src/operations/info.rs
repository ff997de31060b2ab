//! Diagnostic report: active schema and the type tags an inventory uses.

use serde::Serialize;

use crate::config::Config;
use crate::db::Schema;
use crate::inventory::Inventory;
use crate::mapping::is_mapped;

/// What `-q` prints. Built without touching the output database.
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub schema: Schema,
    /// `CREATE TABLE` text for the active schema.
    pub ddl: String,
    /// Distinct type tags, sorted. `None` when no inventory was given.
    pub tags: Option<Vec<String>>,
    /// Tags among `tags` that have no docset category.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmapped: Vec<String>,
}

/// Describe the active schema and, if present, the inventory's tags.
#[must_use]
pub fn info_report(config: &Config, inventory: Option<&Inventory>) -> InfoReport {
    let tags: Option<Vec<String>> =
        inventory.map(|inv| inv.tags().into_iter().map(String::from).collect());
    let unmapped: Vec<String> = tags
        .iter()
        .flatten()
        .filter(|tag| !is_mapped(tag))
        .cloned()
        .collect();
    for tag in &unmapped {
        tracing::warn!(tag = %tag, "type has no docset category; indexing would fail");
    }

    InfoReport {
        schema: config.schema,
        ddl: config.schema.ddl(),
        tags,
        unmapped,
    }
}
