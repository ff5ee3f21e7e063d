//! Delivery of a confirmed outfit: rotate each garment to the pickup
//! point, then record that it was worn.
//!
//! ```text
//! check both slots -> check both ids exist in those slots
//!   -> rotate_to(top.slot)    -> log_usage(top.id)
//!   -> rotate_to(bottom.slot) -> log_usage(bottom.id)
//! ```
//!
//! Usage is only logged for a garment that actually reached the pickup
//! point. A motion fault stops the sequence and is returned as is; the
//! carousel then needs re-homing.
//!
//! The sequence runs in its own task, so a client that disconnects
//! mid-rotation cannot leave a delivered garment without its usage record.

use std::sync::Arc;

use closet_carousel::{MotionError, RotationController, RotationPlan};
use closet_core::error::CoreError;
use closet_core::types::{DbId, Slot};
use closet_db::models::garment::Garment;
use closet_db::repositories::GarmentRepo;
use closet_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A garment the user accepted, as shown to them by the kiosk.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SelectedGarment {
    pub id: DbId,
    pub slot: i64,
}

/// One garment presented at the pickup point.
#[derive(Debug, Clone, Serialize)]
pub struct Delivery {
    pub garment: Garment,
    pub rotation: RotationPlan,
}

/// Rotate to and log usage for the top, then the bottom.
///
/// Dropping the returned future does not cancel a delivery in progress.
pub async fn deliver_outfit(
    pool: &DbPool,
    carousel: &Arc<RotationController>,
    top: SelectedGarment,
    bottom: SelectedGarment,
) -> AppResult<Vec<Delivery>> {
    let pool = pool.clone();
    let carousel = Arc::clone(carousel);
    tokio::spawn(async move { run_delivery(&pool, &carousel, top, bottom).await })
        .await
        .map_err(|e| AppError::InternalError(format!("delivery task failed: {e}")))?
}

async fn run_delivery(
    pool: &DbPool,
    carousel: &Arc<RotationController>,
    top: SelectedGarment,
    bottom: SelectedGarment,
) -> AppResult<Vec<Delivery>> {
    let config = carousel.config();
    let targets = [
        (top.id, config.check_slot(top.slot)?),
        (bottom.id, config.check_slot(bottom.slot)?),
    ];

    for (id, slot) in targets {
        let garment = GarmentRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Garment",
                id,
            })?;
        if garment.slot != slot {
            return Err(CoreError::Conflict(format!(
                "Garment {id} is in slot {}, not slot {slot}",
                garment.slot
            ))
            .into());
        }
    }

    let mut deliveries = Vec::with_capacity(targets.len());
    for (id, slot) in targets {
        let rotation = rotate(carousel, slot).await?;
        let garment = GarmentRepo::log_usage(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Garment",
                id,
            })?;

        tracing::info!(
            garment_id = id,
            slot,
            usage_count = garment.usage_count,
            "Garment delivered",
        );
        deliveries.push(Delivery { garment, rotation });
    }

    Ok(deliveries)
}

/// Run one rotation on the blocking pool.
///
/// A panic inside the controller leaves its position unknown; it is
/// reported as a motion fault.
async fn rotate(carousel: &Arc<RotationController>, slot: Slot) -> AppResult<RotationPlan> {
    let controller = Arc::clone(carousel);
    let plan = tokio::task::spawn_blocking(move || controller.rotate_to(slot))
        .await
        .map_err(|e| MotionError::Fault {
            pulses_emitted: 0,
            reason: format!("rotation task aborted: {e}"),
        })??;
    Ok(plan)
}
