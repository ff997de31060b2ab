use std::path::{Path, PathBuf};

use crate::cli::commands::Cli;
use crate::db::schema::Schema;

/// Output filename Dash and Zeal expect inside a docset.
pub const DEFAULT_DB_PATH: &str = "docSet.dsidx";

/// Run configuration, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the docset database to create.
    pub db_path: PathBuf,
    /// Layout of the `searchIndex` table.
    pub schema: Schema,
    /// Inventory to convert, if any.
    pub inventory_path: Option<PathBuf>,
    /// Print schema and type tags instead of writing the index.
    pub info_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

impl Config {
    /// Standard-schema config writing to `db_path`, with no inventory.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            schema: Schema::Standard,
            inventory_path: None,
            info_only: false,
        }
    }

    /// Build the config from parsed command-line arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            db_path: cli.output.clone(),
            schema: Schema::from_extended(cli.extended),
            inventory_path: cli.objects.clone(),
            info_only: cli.info,
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_inventory(mut self, path: impl AsRef<Path>) -> Self {
        self.inventory_path = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn with_info_only(mut self, info_only: bool) -> Self {
        self.info_only = info_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["invdash"]);
        let config = Config::from_cli(&cli);
        assert_eq!(config, Config::default());
        assert_eq!(config.db_path, PathBuf::from("docSet.dsidx"));
        assert_eq!(config.schema, Schema::Standard);
        assert!(config.inventory_path.is_none());
        assert!(!config.info_only);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::parse_from(["invdash", "objects.inv", "-q", "-e", "-o", "out.dsidx"]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.db_path, PathBuf::from("out.dsidx"));
        assert_eq!(config.schema, Schema::Extended);
        assert_eq!(config.inventory_path, Some(PathBuf::from("objects.inv")));
        assert!(config.info_only);
    }

    #[test]
    fn builders() {
        let config = Config::new("x.dsidx")
            .with_schema(Schema::Extended)
            .with_inventory("objects.inv")
            .with_info_only(true);
        assert_eq!(config.schema, Schema::Extended);
        assert!(config.info_only);
        assert_eq!(config.inventory_path, Some(PathBuf::from("objects.inv")));
    }
}
