//! Mode selection: report, index, or do nothing.

use crate::config::Config;
use crate::error::Result;
use crate::indexer::{run_index, IndexResult};
use crate::inventory::read_inventory;
use crate::operations::{info_report, InfoReport};

/// Terminal state of a run.
#[derive(Debug)]
pub enum Outcome {
    /// Info-only mode printed the schema (and tags, if an inventory was read).
    Reported(InfoReport),
    /// The search index was written.
    Indexed(IndexResult),
    /// No inventory and no info request.
    Idle,
}

/// Run one conversion as described by `config`.
///
/// The inventory, when given, is read in full before any mode runs. An
/// inventory without entries counts as no inventory.
pub fn run(config: &Config) -> Result<Outcome> {
    let inventory = config
        .inventory_path
        .as_deref()
        .map(read_inventory)
        .transpose()?
        .filter(|inventory| {
            if inventory.is_empty() {
                tracing::debug!("inventory has no entries");
            }
            !inventory.is_empty()
        });

    if config.info_only {
        return Ok(Outcome::Reported(info_report(config, inventory.as_ref())));
    }

    match inventory {
        Some(inventory) => Ok(Outcome::Indexed(run_index(config, &inventory)?)),
        None => {
            tracing::debug!("no inventory given, nothing to do");
            Ok(Outcome::Idle)
        }
    }
}
