use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use sweetshop_auth::{Hs256TokenCodec, TokenError};

use crate::app::errors::ApiError;
use crate::context::AuthContext;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<Hs256TokenCodec>,
}

/// Require a valid bearer token and attach the caller's identity to the
/// request. A missing or invalid token never reaches a handler.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;

    let claims = state.tokens.verify(token, Utc::now()).map_err(|e| match e {
        TokenError::Expired => ApiError::Unauthorized("token has expired".to_string()),
        _ => ApiError::Unauthorized("invalid token".to_string()),
    })?;

    req.extensions_mut()
        .insert(AuthContext::new(claims.sub, claims.role));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let missing = || ApiError::Unauthorized("missing bearer token".to_string());

    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(missing)?;

    let header = header.to_str().map_err(|_| missing())?;

    let header = header.strip_prefix("Bearer ").ok_or_else(missing)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(missing());
    }

    Ok(token)
}
