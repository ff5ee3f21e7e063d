//! Scan ingest: turn one full detector pass into inventory updates.

use std::collections::BTreeMap;

use closet_carousel::CarouselConfig;
use closet_core::error::CoreError;
use closet_core::garment::{normalize_label, validate_color_hint, validate_label};
use closet_core::types::Slot;
use closet_db::models::garment::{Garment, UpsertGarment};
use closet_db::repositories::GarmentRepo;
use closet_db::DbPool;
use serde::Deserialize;

use crate::error::AppResult;

/// One detector result: what sits in which slot.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectedGarment {
    pub slot: i64,
    pub garment_type: String,
    #[serde(default)]
    pub color_hint: Option<String>,
}

/// Validate a full scan and convert it into upserts keyed by slot.
///
/// Nothing is written unless every entry is valid. A slot may appear at
/// most once per scan. Blank color hints are treated as absent.
pub fn prepare_scan(
    detections: &[DetectedGarment],
    carousel: &CarouselConfig,
) -> AppResult<BTreeMap<Slot, UpsertGarment>> {
    let mut by_slot = BTreeMap::new();

    for detected in detections {
        let slot = carousel.check_slot(detected.slot)?;
        validate_label(&detected.garment_type)?;
        let color_hint = detected
            .color_hint
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty());
        validate_color_hint(color_hint)?;

        let upsert = UpsertGarment {
            slot,
            garment_type: normalize_label(&detected.garment_type),
            color_hint: color_hint.map(str::to_string),
        };
        if by_slot.insert(slot, upsert).is_some() {
            return Err(CoreError::Validation(format!(
                "Slot {slot} appears more than once in the scan"
            ))
            .into());
        }
    }

    Ok(by_slot)
}

/// Apply a scan to the inventory, upserting in ascending slot order.
pub async fn ingest_scan(
    pool: &DbPool,
    carousel: &CarouselConfig,
    detections: &[DetectedGarment],
) -> AppResult<Vec<Garment>> {
    let upserts = prepare_scan(detections, carousel)?;

    let mut garments = Vec::with_capacity(upserts.len());
    for upsert in upserts.values() {
        garments.push(GarmentRepo::upsert(pool, upsert).await?);
    }

    tracing::info!(count = garments.len(), "Scan ingested");
    Ok(garments)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use closet_carousel::MotionError;

    use super::*;
    use crate::error::AppError;

    fn carousel() -> CarouselConfig {
        CarouselConfig::new(40, 200).unwrap()
    }

    fn detected(slot: i64, garment_type: &str) -> DetectedGarment {
        DetectedGarment {
            slot,
            garment_type: garment_type.to_string(),
            color_hint: None,
        }
    }

    #[test]
    fn scan_is_sorted_and_normalized() {
        let scan = vec![detected(7, " Pants "), detected(2, "SHIRT")];
        let prepared = prepare_scan(&scan, &carousel()).unwrap();

        let slots: Vec<Slot> = prepared.keys().copied().collect();
        assert_eq!(slots, vec![2, 7]);
        assert_eq!(prepared[&2].garment_type, "shirt");
        assert_eq!(prepared[&7].garment_type, "pants");
    }

    #[test]
    fn one_bad_entry_rejects_whole_scan() {
        let scan = vec![detected(0, "shirt"), detected(40, "pants")];
        assert_matches!(
            prepare_scan(&scan, &carousel()),
            Err(AppError::Motion(MotionError::InvalidSlot { slot: 40, .. }))
        );

        let scan = vec![detected(0, "shirt"), detected(-1, "pants")];
        assert_matches!(
            prepare_scan(&scan, &carousel()),
            Err(AppError::Motion(MotionError::InvalidSlot { .. }))
        );

        let scan = vec![detected(0, "shirt"), detected(1, "  ")];
        assert_matches!(
            prepare_scan(&scan, &carousel()),
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[test]
    fn duplicate_slot_rejected() {
        let scan = vec![detected(3, "shirt"), detected(3, "skirt")];
        assert_matches!(
            prepare_scan(&scan, &carousel()),
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[test]
    fn blank_color_hint_is_absent() {
        let mut entry = detected(1, "jacket");
        entry.color_hint = Some("   ".to_string());
        let prepared = prepare_scan(&[entry], &carousel()).unwrap();
        assert_eq!(prepared[&1].color_hint, None);
    }
}
