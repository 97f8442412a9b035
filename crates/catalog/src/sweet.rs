use serde::Serialize;

use sweetshop_core::{DomainError, Price, SweetId};

/// Catalog entry.
///
/// The store owns every `Sweet` exclusively; callers only ever see clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sweet {
    pub id: SweetId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub quantity: i64,
}

impl Sweet {
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

/// The admin-mutable field set of a sweet.
///
/// Used both for creation and for full-replacement updates (the client
/// always sends the complete set, never a partial patch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweetFields {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub quantity: i64,
}

impl SweetFields {
    /// Trim and validate, returning the normalized field set.
    pub fn validated(self) -> Result<Self, DomainError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(DomainError::validation("category must not be empty"));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity must not be negative"));
        }
        Ok(Self {
            name,
            category,
            price: self.price,
            quantity: self.quantity,
        })
    }
}
