pub mod entry;
pub mod record;

pub use entry::InventoryEntry;
pub use record::OutputRecord;
