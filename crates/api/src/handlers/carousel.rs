//! Handlers for carousel status and re-homing.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use closet_carousel::{Position, RotationController};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CarouselStatus {
    pub slot_count: u32,
    pub steps_per_revolution: u32,
    pub steps_per_slot: u32,
    pub backend: &'static str,
    pub position: Position,
}

/// GET /api/v1/carousel
///
/// Waits for an in-flight rotation to finish before answering.
pub async fn status(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let status = with_controller(&state.carousel, |c| c.position()).await?;

    Ok(Json(DataResponse { data: status }))
}

/// POST /api/v1/carousel/home
///
/// Call after the carousel has been physically returned to its home mark.
pub async fn rehome(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let status = with_controller(&state.carousel, |c| c.rehome()).await?;

    Ok(Json(DataResponse { data: status }))
}

/// Take the motion lock off the async runtime and report the result.
async fn with_controller<F>(carousel: &Arc<RotationController>, f: F) -> AppResult<CarouselStatus>
where
    F: FnOnce(&RotationController) -> Position + Send + 'static,
{
    let controller = Arc::clone(carousel);
    tokio::task::spawn_blocking(move || {
        let position = f(&controller);
        let config = controller.config();
        CarouselStatus {
            slot_count: config.slot_count(),
            steps_per_revolution: config.steps_per_revolution(),
            steps_per_slot: config.steps_per_slot(),
            backend: controller.backend(),
            position,
        }
    })
    .await
    .map_err(|e| AppError::InternalError(format!("carousel task failed: {e}")))
}
