#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::ProductDraft;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_number, validate_non_empty_string, validate_path, Validate};
use self::toml_config::FileConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_PATH: &str = "./products.json";

/// Fully resolved runtime configuration. Precedence: CLI flag, then
/// config file, then built-in default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub defaults: Vec<ProductDraft>,
    pub verbose: bool,
}

impl AppConfig {
    #[cfg(feature = "cli")]
    pub fn resolve(args: &cli::CliConfig) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args.store_path.clone(), file, args.verbose))
    }

    fn merge(cli_store_path: Option<PathBuf>, file: FileConfig, verbose: bool) -> Self {
        let store_path = cli_store_path
            .or(file.store.and_then(|store| store.path))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        Self {
            store_path,
            defaults: file.defaults.into_iter().map(Into::into).collect(),
            verbose,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store_path", &self.store_path.to_string_lossy())?;

        for draft in &self.defaults {
            validate_non_empty_string("defaults.name", &draft.name)?;
            validate_finite_number("defaults.quantity", draft.quantity)?;
        }

        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn store_path(&self) -> &Path {
        &self.store_path
    }

    fn default_products(&self) -> &[ProductDraft] {
        &self.defaults
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
