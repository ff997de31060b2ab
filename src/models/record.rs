use crate::db::schema::Schema;
use crate::models::entry::InventoryEntry;

/// A row bound for `searchIndex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord<'a> {
    pub name: &'a str,
    pub category: &'static str,
    pub path: &'a str,
    /// Only bound under [`Schema::Extended`].
    pub raw_type: &'a str,
}

impl<'a> OutputRecord<'a> {
    /// Row for `entry`, whose tag has already been mapped to `category`.
    #[must_use]
    pub fn new(entry: &'a InventoryEntry, category: &'static str) -> Self {
        Self {
            name: &entry.name,
            category,
            path: &entry.location,
            raw_type: &entry.tag,
        }
    }

    /// Values in the schema's insert column order.
    #[must_use]
    pub fn values(&self, schema: Schema) -> Vec<&str> {
        match schema {
            Schema::Standard => vec![self.name, self.category, self.path],
            Schema::Extended => vec![self.name, self.category, self.path, self.raw_type],
        }
    }
}
