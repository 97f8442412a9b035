//! In-memory account directory for registration and login.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use sweetshop_core::UserId;

use crate::roles::Role;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("email already registered")]
    EmailTaken,

    /// Covers both unknown email and wrong password, so a caller cannot
    /// probe which addresses exist.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("credential hashing failed")]
    Hashing,
}

/// Account directory keyed by normalized (trimmed, lowercased) email.
///
/// The public registration path always grants [`Role::User`]; admin
/// accounts enter only through [`UserDirectory::seed_admin`] at startup.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn register(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        self.insert(email, password, Role::User)
    }

    /// Startup-only provisioning path for the configured admin account.
    pub fn seed_admin(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        self.insert(email, password, Role::Admin)
    }

    fn insert(&self, email: &str, password: &str, role: Role) -> Result<UserRecord, AuthError> {
        let key = Self::normalize(email);
        if key.is_empty() || !key.contains('@') {
            return Err(AuthError::Validation(
                "email must be a valid address".to_string(),
            ));
        }
        if password.len() < 6 {
            return Err(AuthError::Validation(
                "password must be at least 6 characters".to_string(),
            ));
        }

        // Hash outside the lock; bcrypt is deliberately slow.
        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|_| AuthError::Hashing)?;

        let mut users = self.users.write().unwrap();
        if users.contains_key(&key) {
            return Err(AuthError::EmailTaken);
        }
        let record = UserRecord {
            id: UserId::new(),
            email: key.clone(),
            password_hash,
            role,
        };
        users.insert(key, record.clone());
        tracing::info!(email = %record.email, role = %record.role, "account registered");
        Ok(record)
    }

    /// Verify credentials, returning the account on success.
    pub fn verify(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let key = Self::normalize(email);
        let record = {
            let users = self.users.read().unwrap();
            users.get(&key).cloned()
        }
        .ok_or(AuthError::InvalidCredentials)?;

        let matches =
            bcrypt::verify(password, &record.password_hash).map_err(|_| AuthError::InvalidCredentials)?;
        if matches {
            Ok(record)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
