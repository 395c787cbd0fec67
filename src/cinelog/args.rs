use cinelog::config::StorageKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cinelog")]
#[command(about = "A menu-driven movie catalog for the command line", long_about = None)]
pub struct Cli {
    /// Storage backend (overrides the configured default)
    #[arg(short, long, value_enum)]
    pub storage: Option<StorageKind>,

    /// Path to the data file (JSON document or SQLite database)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Skip the metadata API and enter year/rating manually
    #[arg(long)]
    pub offline: bool,
}
