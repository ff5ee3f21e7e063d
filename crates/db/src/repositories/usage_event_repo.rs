//! Repository for the `usage_events` table (append-only audit trail).

use closet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::usage_event::UsageEvent;

/// Column list for `usage_events` queries.
const COLUMNS: &str = "id, garment_id, worn_at";

/// Provides read access to usage events. Events are only ever written by
/// [`GarmentRepo::log_usage`](crate::repositories::GarmentRepo::log_usage).
pub struct UsageEventRepo;

impl UsageEventRepo {
    /// List deliveries of one garment, newest first.
    pub async fn list_for_garment(
        pool: &SqlitePool,
        garment_id: DbId,
    ) -> Result<Vec<UsageEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM usage_events \
             WHERE garment_id = ?1 \
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, UsageEvent>(&query)
            .bind(garment_id)
            .fetch_all(pool)
            .await
    }
}
