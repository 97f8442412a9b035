//! Shared application services handed to every handler.

use std::sync::Arc;

use sweetshop_auth::{Hs256TokenCodec, UserDirectory};
use sweetshop_catalog::{CatalogService, CatalogStore};

use crate::config::Config;

pub struct AppServices {
    pub store: Arc<CatalogStore>,
    pub catalog: CatalogService,
    pub users: Arc<UserDirectory>,
    pub tokens: Arc<Hs256TokenCodec>,
}

impl AppServices {
    pub fn build(config: &Config) -> Self {
        let store = CatalogStore::arc();
        let catalog = CatalogService::new(store.clone());
        let users = UserDirectory::arc();
        let tokens = Arc::new(Hs256TokenCodec::new(config.jwt_secret.as_bytes()));

        if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
            match users.seed_admin(email, password) {
                Ok(record) => tracing::info!(email = %record.email, "seeded admin account"),
                Err(e) => tracing::warn!(error = %e, "failed to seed admin account"),
            }
        }

        Self {
            store,
            catalog,
            users,
            tokens,
        }
    }
}
