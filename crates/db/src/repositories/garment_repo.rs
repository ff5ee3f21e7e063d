//! Repository for the `garments` table.

use chrono::Utc;
use closet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::garment::{Garment, UpsertGarment};

/// Column list for `garments` queries.
const COLUMNS: &str = "\
    id, slot, garment_type, color_hint, last_worn_at, \
    usage_count, created_at, updated_at";

/// Provides query operations for the garment inventory.
pub struct GarmentRepo;

impl GarmentRepo {
    /// Place a garment into a slot.
    ///
    /// An occupied slot keeps its record: only `garment_type`, the color
    /// hint (when one is given) and `updated_at` change, while `id`,
    /// `usage_count` and `last_worn_at` survive. A single statement, so
    /// concurrent upserts of the same slot cannot lose each other.
    pub async fn upsert(pool: &SqlitePool, input: &UpsertGarment) -> Result<Garment, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO garments (slot, garment_type, color_hint, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?4) \
             ON CONFLICT (slot) DO UPDATE SET \
                garment_type = excluded.garment_type, \
                color_hint = COALESCE(excluded.color_hint, garments.color_hint), \
                updated_at = excluded.updated_at \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Garment>(&query)
            .bind(input.slot)
            .bind(&input.garment_type)
            .bind(&input.color_hint)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a garment by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Garment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM garments WHERE id = ?1");
        sqlx::query_as::<_, Garment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every garment ordered by slot, then creation time, then id.
    ///
    /// The recommender relies on this order for its tie-break.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Garment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM garments ORDER BY slot ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Garment>(&query).fetch_all(pool).await
    }

    /// Record one confirmed delivery of a garment.
    ///
    /// Increments `usage_count` in place, stamps `last_worn_at` and
    /// `updated_at`, and appends a usage event, all in one transaction.
    /// Returns `None` (and writes nothing) if the garment does not exist.
    pub async fn log_usage(pool: &SqlitePool, id: DbId) -> Result<Option<Garment>, sqlx::Error> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE garments SET \
                usage_count = usage_count + 1, \
                last_worn_at = ?1, \
                updated_at = ?1 \
             WHERE id = ?2 \
             RETURNING {COLUMNS}"
        );
        let garment = sqlx::query_as::<_, Garment>(&query)
            .bind(now)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(garment) = garment else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("INSERT INTO usage_events (garment_id, worn_at) VALUES (?1, ?2)")
            .bind(id)
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            garment_id = id,
            usage_count = garment.usage_count,
            "Usage logged",
        );
        Ok(Some(garment))
    }
}
