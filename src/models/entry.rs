/// One documented symbol from an inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    /// Qualified symbol name (may contain spaces for labels and terms).
    pub name: String,
    /// `domain:role` tag, e.g. `py:function`.
    pub tag: String,
    /// Relative URL of the documentation, anchor included.
    pub location: String,
    /// Search priority exactly as written. Not carried into the index.
    pub priority: String,
    /// Display name, `None` when the inventory wrote `-` (same as `name`).
    /// Not carried into the index.
    pub display_name: Option<String>,
}

impl InventoryEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, tag: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            location: location.into(),
            priority: "1".to_string(),
            display_name: None,
        }
    }
}
