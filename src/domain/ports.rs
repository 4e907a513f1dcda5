use crate::domain::model::{Product, ProductDraft};
use crate::utils::error::Result;
use std::path::Path;

/// Durable key-value slot holding the serialized product list.
pub trait StateStore {
    /// Reads the stored snapshot. A missing slot or an unparseable
    /// payload degrades to an empty list; this never fails.
    fn load(&self) -> Vec<Product>;

    /// Serializes the full list and overwrites the slot.
    fn save(&self, products: &[Product]) -> Result<()>;
}

pub trait ConfigProvider {
    fn store_path(&self) -> &Path;

    /// Seed products injected when the store holds nothing usable.
    fn default_products(&self) -> &[ProductDraft];

    fn verbose(&self) -> bool;
}
