//! Handlers for the `/branches` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use franchise_core::types::DbId;
use franchise_db::models::branch::{CreateBranch, UpdateBranch};

use crate::extract::{ApiJson, ApiPath};
use crate::response::respond;
use crate::state::AppState;

/// GET /api/branches/by-franchise/{franchise_id}
pub async fn list_by_franchise(
    State(state): State<AppState>,
    ApiPath(franchise_id): ApiPath<DbId>,
) -> Response {
    respond(
        state.services.branches.list_by_franchise(franchise_id).await,
        StatusCode::OK,
    )
}

/// POST /api/branches
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateBranch>,
) -> Response {
    respond(
        state.services.branches.create(input).await,
        StatusCode::CREATED,
    )
}

/// GET /api/branches/{id}
pub async fn get_by_id(State(state): State<AppState>, ApiPath(id): ApiPath<DbId>) -> Response {
    respond(state.services.branches.get(id).await, StatusCode::OK)
}

/// PUT /api/branches/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateBranch>,
) -> Response {
    respond(
        state.services.branches.update(id, input).await,
        StatusCode::OK,
    )
}

/// DELETE /api/branches/{id}
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<DbId>) -> Response {
    respond(state.services.branches.delete(id).await, StatusCode::OK)
}
