use std::sync::Arc;

use closet_carousel::RotationController;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: closet_db::DbPool,
    /// The one rotation controller owning the carousel motor.
    pub carousel: Arc<RotationController>,
}
