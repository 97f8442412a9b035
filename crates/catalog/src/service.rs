//! Transaction manager: validated, atomic stock-affecting operations.

use std::sync::Arc;

use sweetshop_core::{DomainError, DomainResult, SweetId};

use crate::store::{CatalogStore, StoreError};
use crate::sweet::{Sweet, SweetFields};

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => DomainError::NotFound(id),
            StoreError::WouldGoNegative(id) => DomainError::InsufficientStock(id),
        }
    }
}

/// Exposes create/update/delete/purchase/restock as atomic, validated
/// units over the catalog store's primitives.
///
/// Concurrency policy: a purchase that would drive stock negative is
/// rejected whole; there is no partial fulfillment down to zero.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn create(&self, fields: SweetFields) -> DomainResult<Sweet> {
        let fields = fields.validated()?;
        let sweet = self.store.insert(fields);
        tracing::info!(sweet_id = %sweet.id, name = %sweet.name, "sweet created");
        Ok(sweet)
    }

    pub fn update(&self, id: SweetId, fields: SweetFields) -> DomainResult<Sweet> {
        let fields = fields.validated()?;
        let sweet = self.store.replace(id, fields)?;
        tracing::info!(sweet_id = %sweet.id, "sweet updated");
        Ok(sweet)
    }

    pub fn delete(&self, id: SweetId) -> DomainResult<()> {
        self.store.remove(id)?;
        tracing::info!(sweet_id = %id, "sweet deleted");
        Ok(())
    }

    /// Decrement stock by `amount`, rejecting the whole request when the
    /// amount exceeds what is available.
    pub fn purchase(&self, id: SweetId, amount: i64) -> DomainResult<Sweet> {
        if amount < 1 {
            return Err(DomainError::validation(
                "quantity to purchase must be positive",
            ));
        }
        let sweet = self.store.adjust_quantity(id, -amount)?;
        tracing::info!(sweet_id = %id, amount, remaining = sweet.quantity, "sweet purchased");
        Ok(sweet)
    }

    /// Increment stock by `amount`. No upper bound on the result.
    pub fn restock(&self, id: SweetId, amount: i64) -> DomainResult<Sweet> {
        if amount < 1 {
            return Err(DomainError::validation(
                "quantity to restock must be positive",
            ));
        }
        let sweet = self.store.adjust_quantity(id, amount)?;
        tracing::info!(sweet_id = %id, amount, stock = sweet.quantity, "sweet restocked");
        Ok(sweet)
    }
}
