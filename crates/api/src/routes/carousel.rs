use axum::routing::{get, post};
use axum::Router;

use crate::handlers::carousel;
use crate::state::AppState;

/// Carousel routes mounted at `/carousel`.
///
/// ```text
/// GET  /       -> status
/// POST /home   -> rehome
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(carousel::status))
        .route("/home", post(carousel::rehome))
}
