//! Handlers for outfit recommendation and delivery confirmation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use closet_core::preferences::Preferences;
use serde::{Deserialize, Serialize};

use crate::engine::delivery::{deliver_outfit, Delivery, SelectedGarment};
use crate::engine::recommend::recommend_outfit;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/recommend
///
/// Every field is optional. Returns `{ "data": null }` when the inventory
/// has no usable top or bottom.
pub async fn recommend(
    State(state): State<AppState>,
    Json(prefs): Json<Preferences>,
) -> AppResult<impl IntoResponse> {
    let outfit = recommend_outfit(&state.pool, &prefs).await?;

    Ok(Json(DataResponse { data: outfit }))
}

/// Request body for POST /api/v1/confirm.
#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub accepted: bool,
    pub top: Option<SelectedGarment>,
    pub bottom: Option<SelectedGarment>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmStatus {
    Rejected,
    Delivered,
}

#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub status: ConfirmStatus,
    pub deliveries: Vec<Delivery>,
}

/// POST /api/v1/confirm
///
/// A rejection moves nothing. An acceptance rotates to the top, then the
/// bottom, logging usage after each arrives.
pub async fn confirm(
    State(state): State<AppState>,
    Json(input): Json<ConfirmRequest>,
) -> AppResult<impl IntoResponse> {
    if !input.accepted {
        tracing::info!("Recommendation rejected");
        return Ok(Json(DataResponse {
            data: ConfirmResponse {
                status: ConfirmStatus::Rejected,
                deliveries: Vec::new(),
            },
        }));
    }

    let (Some(top), Some(bottom)) = (input.top, input.bottom) else {
        return Err(AppError::BadRequest(
            "Both top and bottom must be provided to confirm an outfit".to_string(),
        ));
    };

    let deliveries = deliver_outfit(&state.pool, &state.carousel, top, bottom).await?;

    Ok(Json(DataResponse {
        data: ConfirmResponse {
            status: ConfirmStatus::Delivered,
            deliveries,
        },
    }))
}
