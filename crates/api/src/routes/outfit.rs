use axum::routing::post;
use axum::Router;

use crate::handlers::outfit;
use crate::state::AppState;

/// Outfit routes.
///
/// ```text
/// POST /recommend   -> recommend
/// POST /confirm     -> confirm
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recommend", post(outfit::recommend))
        .route("/confirm", post(outfit::confirm))
}
