//! In-memory catalog storage with per-sweet locking.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use sweetshop_core::SweetId;

use crate::sweet::{Sweet, SweetFields};

/// Catalog store error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("sweet not found: {0}")]
    NotFound(SweetId),
    #[error("adjustment would drive stock below zero for sweet: {0}")]
    WouldGoNegative(SweetId),
}

#[derive(Debug)]
struct Slot {
    /// Insertion sequence number; `list` orders by it.
    seq: u64,
    sweet: Mutex<Sweet>,
}

/// Owner of all mutable catalog state.
///
/// The outer map lock is held only to find or (un)register a slot; field
/// mutation takes the per-sweet mutex. Adjustments to the same sweet
/// serialize while operations on distinct sweets never contend, and a
/// reader locks one sweet at a time, so it can never observe a torn record.
#[derive(Debug, Default)]
pub struct CatalogStore {
    slots: RwLock<HashMap<SweetId, Arc<Slot>>>,
    next_seq: AtomicU64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn slot(&self, id: SweetId) -> Result<Arc<Slot>, StoreError> {
        let slots = self.slots.read().unwrap();
        slots.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Store a new sweet, assigning its identifier.
    ///
    /// `fields` must already be validated; the store does not re-check them.
    pub fn insert(&self, fields: SweetFields) -> Sweet {
        let sweet = Sweet {
            id: SweetId::new(),
            name: fields.name,
            category: fields.category,
            price: fields.price,
            quantity: fields.quantity,
        };
        let slot = Arc::new(Slot {
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            sweet: Mutex::new(sweet.clone()),
        });
        self.slots.write().unwrap().insert(sweet.id, slot);
        sweet
    }

    pub fn get(&self, id: SweetId) -> Result<Sweet, StoreError> {
        let slot = self.slot(id)?;
        let sweet = slot.sweet.lock().unwrap();
        Ok(sweet.clone())
    }

    /// Snapshot of every sweet, in creation order.
    pub fn list(&self) -> Vec<Sweet> {
        let slots = self.slots.read().unwrap();
        let mut entries: Vec<(u64, Sweet)> = slots
            .values()
            .map(|slot| (slot.seq, slot.sweet.lock().unwrap().clone()))
            .collect();
        drop(slots);
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, sweet)| sweet).collect()
    }

    /// Fully replace the mutable fields of a sweet.
    pub fn replace(&self, id: SweetId, fields: SweetFields) -> Result<Sweet, StoreError> {
        let slot = self.slot(id)?;
        let mut sweet = slot.sweet.lock().unwrap();
        sweet.name = fields.name;
        sweet.category = fields.category;
        sweet.price = fields.price;
        sweet.quantity = fields.quantity;
        Ok(sweet.clone())
    }

    pub fn remove(&self, id: SweetId) -> Result<(), StoreError> {
        match self.slots.write().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Atomically apply `delta` to a sweet's quantity.
    ///
    /// The only path permitted to mutate `quantity`. The check and the
    /// write happen under the sweet's own mutex, so the read-modify-write
    /// step is indivisible relative to every other adjustment of that id.
    pub fn adjust_quantity(&self, id: SweetId, delta: i64) -> Result<Sweet, StoreError> {
        let slot = self.slot(id)?;
        let mut sweet = slot.sweet.lock().unwrap();
        let next = sweet.quantity.saturating_add(delta);
        if next < 0 {
            return Err(StoreError::WouldGoNegative(id));
        }
        sweet.quantity = next;
        Ok(sweet.clone())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sweetshop_core::Price;

    use super::*;

    fn fields(name: &str, quantity: i64) -> SweetFields {
        SweetFields {
            name: name.to_string(),
            category: "Candy".to_string(),
            price: Price::from_cents(150).unwrap(),
            quantity,
        }
    }

    #[test]
    fn insert_get_roundtrip() {
        let store = CatalogStore::new();
        let created = store.insert(fields("Gummy Bear", 10));

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.quantity, 10);
    }

    #[test]
    fn list_preserves_creation_order() {
        let store = CatalogStore::new();
        let a = store.insert(fields("A", 1));
        let b = store.insert(fields("B", 2));
        let c = store.insert(fields("C", 3));

        let names: Vec<String> = store.list().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        // Removal keeps the relative order of the survivors.
        store.remove(b.id).unwrap();
        let ids: Vec<SweetId> = store.list().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn replace_overwrites_every_mutable_field() {
        let store = CatalogStore::new();
        let created = store.insert(fields("Gummy Bear", 10));

        let updated = store
            .replace(
                created.id,
                SweetFields {
                    name: "Sour Worm".to_string(),
                    category: "Sour".to_string(),
                    price: Price::from_cents(300).unwrap(),
                    quantity: 4,
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Sour Worm");
        assert_eq!(updated.category, "Sour");
        assert_eq!(updated.price.cents(), 300);
        assert_eq!(updated.quantity, 4);
    }

    #[test]
    fn missing_id_reports_not_found() {
        let store = CatalogStore::new();
        let id = SweetId::new();

        assert_eq!(store.get(id).unwrap_err(), StoreError::NotFound(id));
        assert_eq!(store.remove(id).unwrap_err(), StoreError::NotFound(id));
        assert_eq!(
            store.adjust_quantity(id, 1).unwrap_err(),
            StoreError::NotFound(id)
        );
        assert_eq!(
            store.replace(id, fields("X", 0)).unwrap_err(),
            StoreError::NotFound(id)
        );
    }

    #[test]
    fn adjust_quantity_enforces_the_floor() {
        let store = CatalogStore::new();
        let created = store.insert(fields("Gummy Bear", 10));

        assert_eq!(store.adjust_quantity(created.id, -3).unwrap().quantity, 7);
        assert_eq!(
            store.adjust_quantity(created.id, -20).unwrap_err(),
            StoreError::WouldGoNegative(created.id)
        );
        // Failed adjustment leaves the count untouched.
        assert_eq!(store.get(created.id).unwrap().quantity, 7);

        let drained = store.adjust_quantity(created.id, -7).unwrap();
        assert_eq!(drained.quantity, 0);
        assert!(drained.is_out_of_stock());
    }

    #[test]
    fn concurrent_overlapping_purchases_admit_exactly_one_winner() {
        // Stock 10; two concurrent decrements of 7 individually fit but
        // jointly exceed it: exactly one must succeed.
        for _ in 0..50 {
            let store = CatalogStore::arc();
            let id = store.insert(fields("Gummy Bear", 10)).id;

            let barrier = Arc::new(std::sync::Barrier::new(2));
            let mut handles = Vec::new();
            for _ in 0..2 {
                let store = store.clone();
                let barrier = barrier.clone();
                handles.push(std::thread::spawn(move || {
                    barrier.wait();
                    store.adjust_quantity(id, -7)
                }));
            }

            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            let wins = results.iter().filter(|r| r.is_ok()).count();
            assert_eq!(wins, 1, "exactly one purchase must win: {results:?}");
            assert_eq!(store.get(id).unwrap().quantity, 3);
        }
    }

    #[test]
    fn concurrent_adjustments_never_lose_updates() {
        let store = CatalogStore::arc();
        let id = store.insert(fields("Gummy Bear", 0)).id;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    store.adjust_quantity(id, 1).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get(id).unwrap().quantity, 800);
    }

    proptest! {
        /// For every sequence of adjustments, the stock count never goes
        /// negative and every applied delta is fully reflected.
        #[test]
        fn quantity_never_goes_negative(
            initial in 0i64..1_000,
            deltas in proptest::collection::vec(-500i64..500, 0..64),
        ) {
            let store = CatalogStore::new();
            let id = store.insert(fields("Gummy Bear", initial)).id;

            let mut expected = initial;
            for delta in deltas {
                match store.adjust_quantity(id, delta) {
                    Ok(sweet) => {
                        expected += delta;
                        prop_assert_eq!(sweet.quantity, expected);
                    }
                    Err(StoreError::WouldGoNegative(_)) => {
                        prop_assert!(expected + delta < 0);
                    }
                    Err(err) => panic!("unexpected {err:?}"),
                }
                prop_assert!(store.get(id).unwrap().quantity >= 0);
            }
        }
    }
}
