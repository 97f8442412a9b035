use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

// Body-level type errors surface as a 400 with a readable message, not
// the extractor's default rejection.
fn body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(inner)| inner)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<dto::RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = body(payload)?;
    let record = services.users.register(&payload.email, &payload.password)?;
    Ok((
        StatusCode::CREATED,
        Json(dto::RegisteredResponse::from(record)),
    ))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<dto::LoginRequest>, JsonRejection>,
) -> Result<Json<dto::LoginResponse>, ApiError> {
    let payload = body(payload)?;
    let record = services.users.verify(&payload.email, &payload.password)?;
    let token = services.tokens.issue(&record.email, record.role, Utc::now())?;

    tracing::info!(email = %record.email, "login succeeded");
    Ok(Json(dto::LoginResponse {
        email: record.email,
        token,
    }))
}
