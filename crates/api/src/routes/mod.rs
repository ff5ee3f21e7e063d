pub mod carousel;
pub mod health;
pub mod inventory;
pub mod outfit;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /scan                      ingest a full detector scan (POST)
///
/// /garments                  list inventory (GET)
/// /garments/{id}             get one garment (GET)
/// /garments/{id}/usage       delivery history (GET)
///
/// /recommend                 recommend a top and bottom (POST)
/// /confirm                   accept or reject, then deliver (POST)
///
/// /carousel                  geometry and position (GET)
/// /carousel/home             mark carousel as re-homed (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Scan ingest and inventory reads.
        .merge(inventory::router())
        // Recommendation and delivery.
        .merge(outfit::router())
        // Motion status and re-homing.
        .nest("/carousel", carousel::router())
}
