//! Garment vocabulary: label normalization and top/bottom classification.
//!
//! Garment types arrive as free-form labels from the detector. Labels are
//! stored normalized (trimmed, lowercase) and mapped onto [`GarmentKind`]
//! for scoring. Unknown labels are kept verbatim as [`GarmentKind::Other`]
//! and never take part in outfit selection.

use serde::Serialize;

use crate::error::CoreError;

/// Maximum length of a garment type label.
pub const MAX_LABEL_LEN: usize = 64;

/// Maximum length of a color hint.
pub const MAX_COLOR_HINT_LEN: usize = 64;

/// Which half of an outfit a garment can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentCategory {
    Top,
    Bottom,
}

/// Recognized garment types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentKind {
    Shirt,
    Jacket,
    Tshirt,
    Pants,
    Skirt,
    Shorts,
    Other,
}

impl GarmentKind {
    /// Map a stored label onto a kind. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "shirt" => Self::Shirt,
            "jacket" => Self::Jacket,
            "tshirt" => Self::Tshirt,
            "pants" => Self::Pants,
            "skirt" => Self::Skirt,
            "shorts" => Self::Shorts,
            _ => Self::Other,
        }
    }

    /// Outfit category, or `None` for garments that are neither.
    pub fn category(self) -> Option<GarmentCategory> {
        match self {
            Self::Shirt | Self::Jacket | Self::Tshirt => Some(GarmentCategory::Top),
            Self::Pants | Self::Skirt | Self::Shorts => Some(GarmentCategory::Bottom),
            Self::Other => None,
        }
    }
}

/// Canonical stored form of a garment label.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Validate a detector-supplied garment label.
///
/// Rules:
/// - Must not be empty after trimming.
/// - Must not exceed `MAX_LABEL_LEN` characters.
pub fn validate_label(label: &str) -> Result<(), CoreError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Garment type must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_LABEL_LEN {
        return Err(CoreError::Validation(format!(
            "Garment type must not exceed {MAX_LABEL_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an optional color hint.
pub fn validate_color_hint(hint: Option<&str>) -> Result<(), CoreError> {
    match hint {
        Some(h) if h.chars().count() > MAX_COLOR_HINT_LEN => Err(CoreError::Validation(format!(
            "Color hint must not exceed {MAX_COLOR_HINT_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
