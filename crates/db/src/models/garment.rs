//! Garment inventory models.

use closet_core::recommendation::Wearable;
use closet_core::types::{DbId, Slot, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A garment occupying one carousel slot.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Garment {
    pub id: DbId,
    pub slot: Slot,
    pub garment_type: String,
    pub color_hint: Option<String>,
    pub last_worn_at: Option<Timestamp>,
    pub usage_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Wearable for Garment {
    fn garment_type(&self) -> &str {
        &self.garment_type
    }

    fn usage_count(&self) -> u64 {
        u64::try_from(self.usage_count).unwrap_or(0)
    }
}

/// DTO for placing a detected garment into a slot.
///
/// `garment_type` is expected to be normalized already. A `None` color
/// hint keeps whatever hint the slot had.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertGarment {
    pub slot: Slot,
    pub garment_type: String,
    pub color_hint: Option<String>,
}
