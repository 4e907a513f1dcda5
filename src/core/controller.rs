use crate::domain::model::{Product, ProductDraft, ProductId};
use crate::domain::ports::StateStore;
use std::collections::HashSet;

/// Owns the authoritative product list and the id counter, and pushes a
/// full snapshot to the store after every mutation.
///
/// Ids come from a monotonic counter seeded above the highest persisted
/// id, so rapid successive additions can never collide. Products are
/// immutable records; readers only ever see `&[Product]` snapshots.
pub struct ListController<S: StateStore> {
    store: S,
    products: Vec<Product>,
    next_id: ProductId,
}

impl<S: StateStore> ListController<S> {
    pub fn new(store: S) -> Self {
        Self::with_defaults(store, &[])
    }

    /// Loads the persisted list, falling back to `defaults` when the
    /// store holds nothing usable. Seeded defaults are persisted right
    /// away so the slot mirrors memory from the first turn.
    pub fn with_defaults(store: S, defaults: &[ProductDraft]) -> Self {
        let loaded = store.load();

        let mut controller = Self {
            store,
            products: loaded,
            next_id: 1,
        };
        controller.next_id = controller
            .products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max + 1);

        if controller.products.is_empty() && !defaults.is_empty() {
            tracing::debug!("seeding {} default products", defaults.len());
            for draft in defaults {
                let product = controller.build_product(draft.clone());
                controller.products.push(product);
            }
            controller.persist();
        }

        controller
    }

    /// Immutable snapshot of the current list, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Appends a new product built from `draft`, persists, and returns
    /// the updated snapshot.
    pub fn add(&mut self, draft: ProductDraft) -> &[Product] {
        let product = self.build_product(draft);
        tracing::debug!(id = product.id, name = %product.name, "adding product");
        self.products.push(product);
        self.persist();
        &self.products
    }

    /// Removes every product whose id is in `ids`, keeping the relative
    /// order of the rest. Persists even when nothing matched, so the
    /// slot always mirrors memory.
    pub fn remove_by_ids(&mut self, ids: &HashSet<ProductId>) -> &[Product] {
        let before = self.products.len();
        self.products.retain(|product| !ids.contains(&product.id));
        tracing::debug!(removed = before - self.products.len(), "removing marked products");
        self.persist();
        &self.products
    }

    fn build_product(&mut self, draft: ProductDraft) -> Product {
        let id = self.next_id;
        self.next_id += 1;
        Product {
            id,
            name: draft.name,
            quantity: draft.quantity,
        }
    }

    // A failed write is non-fatal: the in-memory list stays authoritative
    // for the rest of the session.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.products) {
            tracing::warn!("could not persist product list: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStore;
    use crate::utils::error::{ListError, Result};
    use std::io::{Error, ErrorKind};

    /// Store whose writes always fail, for exercising the non-fatal
    /// persistence path.
    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn load(&self) -> Vec<Product> {
            Vec::new()
        }

        fn save(&self, _products: &[Product]) -> Result<()> {
            Err(ListError::StoreWriteFailure(Error::new(
                ErrorKind::Other,
                "disk full",
            )))
        }
    }

    fn draft(name: &str, quantity: f64) -> ProductDraft {
        ProductDraft::new(name, quantity)
    }

    #[test]
    fn add_appends_one_product_with_a_fresh_id() {
        let mut controller = ListController::new(MemoryStore::new());
        controller.add(draft("Milk", 3.0));
        let snapshot = controller.add(draft("Bread", 1.0)).to_vec();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "Milk");
        assert_eq!(snapshot[1].name, "Bread");
        assert_ne!(snapshot[0].id, snapshot[1].id);
    }

    #[test]
    fn ids_stay_unique_for_rapid_additions() {
        let mut controller = ListController::new(MemoryStore::new());
        for i in 0..100 {
            controller.add(draft(&format!("item {i}"), 1.0));
        }

        let mut seen = HashSet::new();
        assert!(controller.products().iter().all(|p| seen.insert(p.id)));
    }

    #[test]
    fn duplicate_names_are_permitted() {
        let mut controller = ListController::new(MemoryStore::new());
        controller.add(draft("Milk", 1.0));
        controller.add(draft("Milk", 2.0));
        assert_eq!(controller.products().len(), 2);
    }

    #[test]
    fn remove_keeps_exactly_the_unmarked_in_order() {
        let mut controller = ListController::new(MemoryStore::new());
        controller.add(draft("A", 1.0));
        controller.add(draft("B", 2.0));
        controller.add(draft("C", 3.0));
        let ids: Vec<ProductId> = controller.products().iter().map(|p| p.id).collect();

        let marked = HashSet::from([ids[0], ids[2]]);
        let names: Vec<String> = controller
            .remove_by_ids(&marked)
            .iter()
            .map(|p| p.name.clone())
            .collect();

        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut controller = ListController::new(MemoryStore::new());
        controller.add(draft("A", 1.0));
        controller.add(draft("B", 2.0));
        let target = HashSet::from([controller.products()[0].id]);

        let once = controller.remove_by_ids(&target).to_vec();
        let twice = controller.remove_by_ids(&target).to_vec();
        assert_eq!(once, twice);
    }

    #[test]
    fn remove_with_no_matches_is_a_noop_but_still_persists() {
        let store = MemoryStore::new();
        let mut controller = ListController::new(store);
        controller.add(draft("A", 1.0));
        controller.remove_by_ids(&HashSet::from([999]));

        assert_eq!(controller.products().len(), 1);
    }

    #[test]
    fn every_mutation_mirrors_into_the_store() {
        let mut controller = ListController::new(MemoryStore::new());
        controller.add(draft("Milk", 3.0));
        let persisted: Vec<Product> =
            serde_json::from_slice(&controller.store.raw().unwrap()).unwrap();
        assert_eq!(persisted, controller.products());

        let marked = HashSet::from([controller.products()[0].id]);
        controller.remove_by_ids(&marked);
        let persisted: Vec<Product> =
            serde_json::from_slice(&controller.store.raw().unwrap()).unwrap();
        assert!(persisted.is_empty());
    }

    #[test]
    fn counter_reseeds_above_persisted_ids() {
        let store = MemoryStore::new();
        store.set_raw(
            serde_json::to_vec(&vec![
                Product {
                    id: 41,
                    name: "Old".to_string(),
                    quantity: 1.0,
                },
                Product {
                    id: 7,
                    name: "Older".to_string(),
                    quantity: 2.0,
                },
            ])
            .unwrap(),
        );

        let mut controller = ListController::new(store);
        let snapshot = controller.add(draft("New", 1.0));
        assert_eq!(snapshot.last().unwrap().id, 42);
    }

    #[test]
    fn defaults_seed_an_empty_store_only() {
        let seeded = ListController::with_defaults(MemoryStore::new(), &[draft("Milk", 1.0)]);
        assert_eq!(seeded.products().len(), 1);
        // The seed is persisted immediately.
        assert!(seeded.store.raw().is_some());

        let store = MemoryStore::new();
        store.set_raw(
            serde_json::to_vec(&vec![Product {
                id: 1,
                name: "Bread".to_string(),
                quantity: 1.0,
            }])
            .unwrap(),
        );
        let loaded = ListController::with_defaults(store, &[draft("Milk", 1.0)]);
        assert_eq!(loaded.products().len(), 1);
        assert_eq!(loaded.products()[0].name, "Bread");
    }

    #[test]
    fn failed_save_keeps_memory_authoritative() {
        let mut controller = ListController::new(BrokenStore);
        let snapshot = controller.add(draft("Milk", 3.0)).to_vec();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "Milk");
        controller.remove_by_ids(&HashSet::from([snapshot[0].id]));
        assert!(controller.products().is_empty());
    }
}
