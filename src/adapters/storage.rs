use crate::domain::model::Product;
use crate::domain::ports::StateStore;
use crate::utils::error::{ListError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Stores the product list as a single JSON file: a UTF-8 array of
/// `{id, name, quantity}` objects, overwritten whole on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(bytes: &[u8]) -> Result<Vec<Product>> {
        serde_json::from_slice(bytes).map_err(ListError::MalformedStoredState)
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Vec<Product> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("cannot read product store {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match Self::decode(&bytes) {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!("{}; starting with an empty list", e);
                Vec::new()
            }
        }
    }

    fn save(&self, products: &[Product]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(ListError::StoreWriteFailure)?;
            }
        }

        let data = serde_json::to_vec(products)?;
        fs::write(&self.path, data).map_err(ListError::StoreWriteFailure)
    }
}

/// Ephemeral slot for tests and throwaway sessions. Keeps the raw
/// serialized payload so malformed snapshots can be injected.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&self, bytes: Vec<u8>) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(bytes);
    }

    pub fn raw(&self) -> Option<Vec<u8>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Vec<Product> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(bytes) = slot.as_deref() else {
            return Vec::new();
        };

        match JsonFileStore::decode(bytes) {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!("{}; starting with an empty list", e);
                Vec::new()
            }
        }
    }

    fn save(&self, products: &[Product]) -> Result<()> {
        let data = serde_json::to_vec(products)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(data);
        Ok(())
    }
}
