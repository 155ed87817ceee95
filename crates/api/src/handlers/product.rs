//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use franchise_core::types::DbId;
use franchise_db::models::product::{CreateProduct, UpdateProduct};

use crate::extract::{ApiJson, ApiPath};
use crate::response::respond;
use crate::state::AppState;

/// GET /api/products/by-branch/{branch_id}
pub async fn list_by_branch(
    State(state): State<AppState>,
    ApiPath(branch_id): ApiPath<DbId>,
) -> Response {
    respond(
        state.services.products.list_by_branch(branch_id).await,
        StatusCode::OK,
    )
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProduct>,
) -> Response {
    respond(
        state.services.products.create(input).await,
        StatusCode::CREATED,
    )
}

/// GET /api/products/{id}
pub async fn get_by_id(State(state): State<AppState>, ApiPath(id): ApiPath<DbId>) -> Response {
    respond(state.services.products.get(id).await, StatusCode::OK)
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateProduct>,
) -> Response {
    respond(
        state.services.products.update(id, input).await,
        StatusCode::OK,
    )
}

/// DELETE /api/products/{id}
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<DbId>) -> Response {
    respond(state.services.products.delete(id).await, StatusCode::OK)
}
