use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use sweetshop_auth::{authorize, Operation};
use sweetshop_catalog::{query, Sweet};
use sweetshop_core::SweetId;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_sweets).post(create_sweet))
        .route("/search", get(search_sweets))
        .route("/categories", get(list_categories))
        .route("/:id", put(update_sweet).delete(delete_sweet))
        .route("/:id/purchase", post(purchase_sweet))
        .route("/:id/restock", post(restock_sweet))
}

fn parse_id(id: &str) -> Result<SweetId, ApiError> {
    id.parse::<SweetId>().map_err(ApiError::from)
}

// Body-level type errors (non-numeric price/quantity and the like) are
// 400s with a readable message, not the extractor's default rejection.
fn body(payload: Result<Json<dto::SweetRequest>, JsonRejection>) -> Result<dto::SweetRequest, ApiError> {
    payload
        .map(|Json(inner)| inner)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

pub async fn list_sweets(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
) -> Result<Json<Vec<Sweet>>, ApiError> {
    authorize(caller.role(), Operation::List)?;
    Ok(Json(services.store.list()))
}

pub async fn search_sweets(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
    Query(params): Query<dto::SearchParams>,
) -> Result<Json<Vec<Sweet>>, ApiError> {
    authorize(caller.role(), Operation::Search)?;
    let criteria = params.into_criteria()?;
    Ok(Json(query::search(&services.store, &criteria)))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
) -> Result<Json<Vec<String>>, ApiError> {
    authorize(caller.role(), Operation::List)?;
    Ok(Json(query::categories(&services.store)))
}

pub async fn create_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
    payload: Result<Json<dto::SweetRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    authorize(caller.role(), Operation::Create)?;
    let payload = body(payload)?;
    let sweet = services.catalog.create(payload.into_fields())?;
    Ok((StatusCode::CREATED, Json(sweet)))
}

pub async fn update_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
    Path(id): Path<String>,
    payload: Result<Json<dto::SweetRequest>, JsonRejection>,
) -> Result<Json<Sweet>, ApiError> {
    authorize(caller.role(), Operation::Update)?;
    let id = parse_id(&id)?;
    let payload = body(payload)?;
    let sweet = services.catalog.update(id, payload.into_fields())?;
    Ok(Json(sweet))
}

pub async fn delete_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    authorize(caller.role(), Operation::Delete)?;
    let id = parse_id(&id)?;
    services.catalog.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn purchase_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
    Path(id): Path<String>,
    Query(params): Query<dto::QuantityParam>,
) -> Result<Json<Sweet>, ApiError> {
    authorize(caller.role(), Operation::Purchase)?;
    let id = parse_id(&id)?;
    let amount = params.parse()?;
    let sweet = services.catalog.purchase(id, amount)?;
    Ok(Json(sweet))
}

pub async fn restock_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
    Path(id): Path<String>,
    Query(params): Query<dto::QuantityParam>,
) -> Result<Json<Sweet>, ApiError> {
    authorize(caller.role(), Operation::Restock)?;
    let id = parse_id(&id)?;
    let amount = params.parse()?;
    let sweet = services.catalog.restock(id, amount)?;
    Ok(Json(sweet))
}
