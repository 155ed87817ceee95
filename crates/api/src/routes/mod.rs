pub mod branch;
pub mod franchise;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /franchises                          list, create
/// /franchises/{id}                     get, update, delete (cascades)
/// /franchises/{id}/top-stock           top-stock product per branch
///
/// /branches                            create
/// /branches/{id}                       get, update, delete (cascades)
/// /branches/by-franchise/{id}          list with product counts
///
/// /products                            create
/// /products/{id}                       get, update, delete
/// /products/by-branch/{id}             list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/franchises", franchise::router())
        .nest("/branches", branch::router())
        .nest("/products", product::router())
}
