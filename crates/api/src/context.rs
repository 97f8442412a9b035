use sweetshop_auth::Role;

/// Authenticated caller identity for a request.
///
/// Inserted by the auth middleware; immutable and present for all
/// catalog routes. The role is taken from the verified token claim —
/// the gateway is the sole authority on it, the client treats the token
/// as opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    email: String,
    role: Role,
}

impl AuthContext {
    pub fn new(email: String, role: Role) -> Self {
        Self { email, role }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
