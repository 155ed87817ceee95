//! Handlers for the `/franchises` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use franchise_core::types::DbId;
use franchise_db::models::franchise::{CreateFranchise, UpdateFranchise};

use crate::extract::{ApiJson, ApiPath};
use crate::response::respond;
use crate::state::AppState;

/// GET /api/franchises
pub async fn list(State(state): State<AppState>) -> Response {
    respond(state.services.franchises.list().await, StatusCode::OK)
}

/// POST /api/franchises
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateFranchise>,
) -> Response {
    respond(
        state.services.franchises.create(input).await,
        StatusCode::CREATED,
    )
}

/// GET /api/franchises/{id}
pub async fn get_by_id(State(state): State<AppState>, ApiPath(id): ApiPath<DbId>) -> Response {
    respond(state.services.franchises.get(id).await, StatusCode::OK)
}

/// PUT /api/franchises/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateFranchise>,
) -> Response {
    respond(
        state.services.franchises.update(id, input).await,
        StatusCode::OK,
    )
}

/// DELETE /api/franchises/{id}
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<DbId>) -> Response {
    respond(state.services.franchises.delete(id).await, StatusCode::OK)
}

/// GET /api/franchises/{id}/top-stock
pub async fn top_stock(State(state): State<AppState>, ApiPath(id): ApiPath<DbId>) -> Response {
    respond(
        state.services.franchises.top_stock_report(id).await,
        StatusCode::OK,
    )
}
