//! Application configuration loaded from environment variables.

/// Server configuration with dev-friendly defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default `"0.0.0.0"`)
/// - `PORT` — listen port (default `8080`)
/// - `JWT_SECRET` — HS256 signing secret (insecure dev default)
/// - `ADMIN_EMAIL` / `ADMIN_PASSWORD` — optional admin account seeded at
///   startup; the public register endpoint only ever grants USER
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret,
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "dev-secret".to_string(),
            admin_email: None,
            admin_password: None,
        }
    }
}
