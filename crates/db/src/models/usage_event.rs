use closet_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One confirmed delivery of a garment (append-only).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct UsageEvent {
    pub id: DbId,
    pub garment_id: DbId,
    pub worn_at: Timestamp,
}
