//! `sweetshop-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage engines:
//! the role policy and claim validation are pure, the token codec wraps
//! HS256 signing, and the user directory owns credential state.

pub mod authorize;
pub mod claims;
pub mod roles;
pub mod token;
pub mod users;

pub use authorize::{authorize, AuthzError, Operation};
pub use claims::{validate_claims, Claims, TokenValidationError};
pub use roles::Role;
pub use token::{Hs256TokenCodec, TokenError};
pub use users::{AuthError, UserDirectory, UserRecord};
