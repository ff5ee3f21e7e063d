//! Recommendation over a fresh inventory snapshot.

use closet_core::preferences::Preferences;
use closet_core::recommendation::{recommend, Outfit};
use closet_db::models::garment::Garment;
use closet_db::repositories::GarmentRepo;
use closet_db::DbPool;

/// Recommend a top and a bottom from the current inventory.
///
/// Inventory is re-read on every call. `None` means the inventory lacks a
/// usable top or bottom.
pub async fn recommend_outfit(
    pool: &DbPool,
    prefs: &Preferences,
) -> Result<Option<Outfit<Garment>>, sqlx::Error> {
    let garments = GarmentRepo::list_all(pool).await?;

    let outfit = recommend(&garments, prefs).map(|o| Outfit {
        top: o.top.clone(),
        bottom: o.bottom.clone(),
    });

    match &outfit {
        Some(o) => tracing::debug!(
            top_id = o.top.id,
            top_slot = o.top.slot,
            bottom_id = o.bottom.id,
            bottom_slot = o.bottom.slot,
            ?prefs,
            "Outfit recommended",
        ),
        None => tracing::debug!(
            inventory = garments.len(),
            ?prefs,
            "No outfit available"
        ),
    }

    Ok(outfit)
}
