//! Stateless read path over a catalog snapshot.

use sweetshop_core::Price;

use crate::store::CatalogStore;
use crate::sweet::Sweet;

/// Request-scoped filter criteria; present filters apply conjunctively.
///
/// Reads are snapshot-at-call-time: results reflect stock at the moment
/// of the read, not a view guaranteed consistent with later writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the name.
    pub name: Option<String>,
    /// Exact match against the category.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Price>,
    /// Inclusive upper price bound.
    pub max_price: Option<Price>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    fn matches(&self, sweet: &Sweet) -> bool {
        if let Some(name) = &self.name {
            if !sweet.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if sweet.category != *category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if sweet.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if sweet.price > max {
                return false;
            }
        }
        true
    }
}

/// Filter a snapshot of the store. No criteria means the full listing,
/// in store order.
pub fn search(store: &CatalogStore, criteria: &FilterCriteria) -> Vec<Sweet> {
    let all = store.list();
    if criteria.is_empty() {
        return all;
    }
    all.into_iter().filter(|s| criteria.matches(s)).collect()
}

/// Distinct categories currently present, sorted.
///
/// Derived from the data on every call; categories are not a stored entity.
pub fn categories(store: &CatalogStore) -> Vec<String> {
    let mut categories: Vec<String> = store.list().into_iter().map(|s| s.category).collect();
    categories.sort();
    categories.dedup();
    categories
}
