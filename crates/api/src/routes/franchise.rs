use axum::routing::get;
use axum::Router;

use crate::handlers::franchise;
use crate::state::AppState;

/// Routes mounted at `/franchises`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/top-stock   -> top_stock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(franchise::list).post(franchise::create))
        .route(
            "/{id}",
            get(franchise::get_by_id)
                .put(franchise::update)
                .delete(franchise::delete),
        )
        .route("/{id}/top-stock", get(franchise::top_stock))
}
