// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - cast_possible_truncation: zlib stream offsets fit in usize
// - cast_sign_loss: row counts from SQLite are never negative
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - module_name_repetitions: `inventory::InventoryHeader` reads better than `Header`
// - needless_pass_by_value: Sometimes clearer semantically
// - fn_params_excessive_bools: CLI flags are naturally boolean
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value,
    clippy::fn_params_excessive_bools
)]

pub mod cli;
pub mod config;
pub mod db;
pub mod driver;
pub mod error;
pub mod indexer;
pub mod inventory;
pub mod mapping;
pub mod models;
pub mod operations;
