//! Results of the two run modes, shaped for CLI output.

pub mod index;
pub mod info;

pub use index::IndexOutput;
pub use info::{info_report, InfoReport};
