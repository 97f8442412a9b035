use thiserror::Error;

use crate::roles::Role;

/// Catalog operations subject to role policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    List,
    Search,
    Purchase,
    Create,
    Update,
    Delete,
    Restock,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Search => "search",
            Operation::Purchase => "purchase",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Restock => "restock",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: {} requires the ADMIN role", .0.name())]
    Forbidden(Operation),
}

/// Authorize an operation for the caller's role.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// Must be consulted before any store mutation is attempted, so a denied
/// request has no partial side effects.
pub fn authorize(role: Role, operation: Operation) -> Result<(), AuthzError> {
    match operation {
        Operation::List | Operation::Search | Operation::Purchase => Ok(()),
        Operation::Create | Operation::Update | Operation::Delete | Operation::Restock => {
            if role.is_admin() {
                Ok(())
            } else {
                Err(AuthzError::Forbidden(operation))
            }
        }
    }
}
