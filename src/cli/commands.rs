use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_DB_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "invdash",
    version,
    about = "Build a Dash/Zeal docset search index from a Sphinx objects.inv",
    after_help = "With no OBJECTS and no -q there is nothing to do and invdash exits successfully. \
                  The output path must not already contain a searchIndex table."
)]
pub struct Cli {
    /// Sphinx inventory file (objects.inv) to convert
    #[arg(value_name = "OBJECTS")]
    pub objects: Option<PathBuf>,

    /// Print the schema and the inventory's type tags; write nothing
    #[arg(short = 'q', long = "info")]
    pub info: bool,

    /// Use the extended schema (adds a raw_type column)
    #[arg(short = 'e', long)]
    pub extended: bool,

    /// Write the database to PATH
    #[arg(short = 'o', long, value_name = "PATH", default_value = DEFAULT_DB_PATH)]
    pub output: PathBuf,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}
