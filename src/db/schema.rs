//! Output table layouts for the docset search index.

use std::fmt;

use serde::Serialize;

/// Table name the docset viewers query.
pub const TABLE_NAME: &str = "searchIndex";

/// Columns every schema carries, in DDL order. `id` is assigned by `SQLite`.
const STANDARD_COLUMNS: &[(&str, &str)] = &[
    ("id", "INTEGER PRIMARY KEY"),
    ("name", "TEXT"),
    ("type", "TEXT"),
    ("path", "TEXT"),
];

/// Extra columns of the extended schema.
const EXTENDED_COLUMNS: &[(&str, &str)] = &[("raw_type", "TEXT")];

/// The two supported `searchIndex` layouts.
///
/// DDL and insert statement are both derived from the same column list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// `id, name, type, path`
    #[default]
    Standard,
    /// Standard plus `raw_type`, the inventory tag before mapping.
    Extended,
}

impl Schema {
    #[must_use]
    pub fn from_extended(extended: bool) -> Self {
        if extended {
            Self::Extended
        } else {
            Self::Standard
        }
    }

    /// All columns with their declared types.
    fn columns(self) -> impl Iterator<Item = &'static (&'static str, &'static str)> {
        let extra: &[(&str, &str)] = match self {
            Self::Standard => &[],
            Self::Extended => EXTENDED_COLUMNS,
        };
        STANDARD_COLUMNS.iter().chain(extra)
    }

    /// Columns bound on insert (everything but `id`).
    #[must_use]
    pub fn bound_columns(self) -> Vec<&'static str> {
        self.columns()
            .map(|&(name, _)| name)
            .filter(|&name| name != "id")
            .collect()
    }

    /// `CREATE TABLE` statement for this layout.
    #[must_use]
    pub fn ddl(self) -> String {
        let cols: Vec<String> = self
            .columns()
            .map(|(name, ty)| format!("{name} {ty}"))
            .collect();
        format!("CREATE TABLE {TABLE_NAME} ({})", cols.join(", "))
    }

    /// Parameterized `INSERT` matching [`Schema::bound_columns`].
    #[must_use]
    pub fn insert_sql(self) -> String {
        let cols = self.bound_columns();
        let placeholders: Vec<String> = (1..=cols.len()).map(|i| format!("?{i}")).collect();
        format!(
            "INSERT INTO {TABLE_NAME} ({}) VALUES ({})",
            cols.join(", "),
            placeholders.join(", ")
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
