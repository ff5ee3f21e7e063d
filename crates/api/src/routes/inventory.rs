use axum::routing::{get, post};
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// Inventory routes.
///
/// ```text
/// POST /scan                   -> scan
/// GET  /garments               -> list_garments
/// GET  /garments/{id}          -> get_garment
/// GET  /garments/{id}/usage    -> list_usage
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/scan", post(inventory::scan))
        .route("/garments", get(inventory::list_garments))
        .route("/garments/{id}", get(inventory::get_garment))
        .route("/garments/{id}/usage", get(inventory::list_usage))
}
