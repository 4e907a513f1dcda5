use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "shoplist")]
#[command(about = "A small persistent product list with a sortable table view")]
pub struct CliConfig {
    /// File holding the persisted product list. Overrides the config
    /// file when both are given.
    #[arg(long)]
    pub store_path: Option<PathBuf>,

    /// Optional TOML file with store settings and seed products.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
