use axum::routing::{get, post};
use axum::Router;

use crate::handlers::branch;
use crate::state::AppState;

/// Routes mounted at `/branches`.
///
/// ```text
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /by-franchise/{franchise_id}   -> list_by_franchise
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(branch::create))
        .route(
            "/{id}",
            get(branch::get_by_id)
                .put(branch::update)
                .delete(branch::delete),
        )
        .route(
            "/by-franchise/{franchise_id}",
            get(branch::list_by_franchise),
        )
}
