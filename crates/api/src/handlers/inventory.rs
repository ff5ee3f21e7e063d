//! Handlers for scan ingest and inventory reads.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use closet_core::error::CoreError;
use closet_core::types::DbId;
use closet_db::repositories::{GarmentRepo, UsageEventRepo};
use serde::Deserialize;

use crate::engine::inventory::{ingest_scan, DetectedGarment};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for a full carousel scan.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub items: Vec<DetectedGarment>,
}

/// POST /api/v1/scan
///
/// Record what the detector saw in each slot. Returns the updated records
/// in slot order.
pub async fn scan(
    State(state): State<AppState>,
    Json(input): Json<ScanRequest>,
) -> AppResult<impl IntoResponse> {
    let garments = ingest_scan(&state.pool, state.carousel.config(), &input.items).await?;

    Ok(Json(DataResponse { data: garments }))
}

/// GET /api/v1/garments
///
/// List the whole inventory ordered by slot.
pub async fn list_garments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let garments = GarmentRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: garments }))
}

/// GET /api/v1/garments/{id}
pub async fn get_garment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let garment = GarmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Garment",
            id,
        }))?;

    Ok(Json(DataResponse { data: garment }))
}

/// GET /api/v1/garments/{id}/usage
///
/// Delivery history of one garment, newest first.
pub async fn list_usage(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if GarmentRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Garment",
            id,
        }));
    }

    let events = UsageEventRepo::list_for_garment(&state.pool, id).await?;

    Ok(Json(DataResponse { data: events }))
}
