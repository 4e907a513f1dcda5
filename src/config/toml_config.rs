use crate::domain::model::ProductDraft;
use crate::utils::error::{ListError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional TOML configuration file:
///
/// ```toml
/// [store]
/// path = "groceries.json"
///
/// [[defaults]]
/// name = "Milk"
/// quantity = 2
///
/// [[defaults]]
/// name = "Bread"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub store: Option<StoreSection>,
    #[serde(default)]
    pub defaults: Vec<SeedProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<PathBuf>,
}

/// A seed record injected into an otherwise empty store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
}

fn default_quantity() -> f64 {
    1.0
}

impl From<SeedProduct> for ProductDraft {
    fn from(seed: SeedProduct) -> Self {
        ProductDraft::new(seed.name, seed.quantity)
    }
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ListError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ListError::ConfigError {
            message: format!("invalid config file: {}", e),
        })
    }
}
