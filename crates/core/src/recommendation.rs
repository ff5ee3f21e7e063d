//! Rule-based outfit scoring and top/bottom selection.
//!
//! Pure logic over an inventory snapshot. The caller re-reads inventory
//! for every request and passes the records in `list_all` order; the
//! first-encountered record wins ties, so the result is fully determined
//! by the snapshot and the preferences.
//!
//! ```text
//! score = base(kind, occasion)
//!       + mood_modifier(mood)
//!       + weather_modifier(weather, kind)
//!       + recency_bonus(usage_count)
//! ```

use serde::Serialize;

use crate::garment::{GarmentCategory, GarmentKind};
use crate::preferences::{Mood, Occasion, Preferences, Weather};

/// Every garment starts from this score.
pub const BASE_SCORE: f64 = 1.0;

/// Added when the garment suits the occasion.
pub const OCCASION_BONUS: f64 = 1.0;

/// Anything the recommender can score.
pub trait Wearable {
    /// Stored garment type label.
    fn garment_type(&self) -> &str;

    /// Number of confirmed deliveries so far.
    fn usage_count(&self) -> u64;
}

/// A recommended top/bottom pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outfit<T> {
    pub top: T,
    pub bottom: T,
}

// ---------------------------------------------------------------------------
// Score terms
// ---------------------------------------------------------------------------

/// Baseline plus the occasion bonus when `kind` is appropriate.
///
/// | Occasion | Suitable kinds          |
/// |----------|-------------------------|
/// | formal   | shirt, jacket, pants    |
/// | party    | jacket, skirt           |
/// | sports   | tshirt, shorts          |
pub fn base_score(kind: GarmentKind, occasion: Occasion) -> f64 {
    use GarmentKind::*;

    let suitable = match occasion {
        Occasion::Formal => matches!(kind, Shirt | Jacket | Pants),
        Occasion::Party => matches!(kind, Jacket | Skirt),
        Occasion::Sports => matches!(kind, Tshirt | Shorts),
        Occasion::Casual | Occasion::Unspecified => false,
    };

    if suitable {
        BASE_SCORE + OCCASION_BONUS
    } else {
        BASE_SCORE
    }
}

pub fn mood_modifier(mood: Mood) -> f64 {
    match mood {
        Mood::Happy => 0.3,
        Mood::Tired => -0.1,
        Mood::Energetic => 0.5,
        Mood::Neutral | Mood::Unspecified => 0.0,
    }
}

pub fn weather_modifier(weather: Weather, kind: GarmentKind) -> f64 {
    match (weather, kind) {
        (Weather::Cold, GarmentKind::Jacket) => 1.0,
        (Weather::Hot, GarmentKind::Jacket | GarmentKind::Pants) => -0.5,
        _ => 0.0,
    }
}

/// Step function favoring less-worn garments. Never increases with usage.
pub fn recency_bonus(usage_count: u64) -> f64 {
    match usage_count {
        0 => 0.5,
        1..=2 => 0.2,
        3..=9 => 0.0,
        _ => -0.3,
    }
}

/// Total score for one garment. `time_of_day` does not contribute.
pub fn score(kind: GarmentKind, usage_count: u64, prefs: &Preferences) -> f64 {
    base_score(kind, prefs.occasion)
        + mood_modifier(prefs.mood)
        + weather_modifier(prefs.weather, kind)
        + recency_bonus(usage_count)
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Pick the best top and the best bottom from `items`.
///
/// Returns `None` when the snapshot has no top or no bottom. That is a
/// legitimate empty result, not an error.
pub fn recommend<'a, T: Wearable>(items: &'a [T], prefs: &Preferences) -> Option<Outfit<&'a T>> {
    let mut best_top: Option<(f64, &T)> = None;
    let mut best_bottom: Option<(f64, &T)> = None;

    for item in items {
        let kind = GarmentKind::from_label(item.garment_type());
        let current = match kind.category() {
            Some(GarmentCategory::Top) => &mut best_top,
            Some(GarmentCategory::Bottom) => &mut best_bottom,
            None => continue,
        };

        let s = score(kind, item.usage_count(), prefs);
        // Strictly greater: the first record seen keeps a tie.
        if current.map_or(true, |(best, _)| s > best) {
            *current = Some((s, item));
        }
    }

    match (best_top, best_bottom) {
        (Some((_, top)), Some((_, bottom))) => Some(Outfit { top, bottom }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::TimeOfDay;

    #[derive(Debug, PartialEq)]
    struct Item {
        slot: u32,
        label: &'static str,
        usage: u64,
    }

    impl Wearable for Item {
        fn garment_type(&self) -> &str {
            self.label
        }

        fn usage_count(&self) -> u64 {
            self.usage
        }
    }

    fn item(slot: u32, label: &'static str, usage: u64) -> Item {
        Item { slot, label, usage }
    }

    fn prefs(mood: Mood, occasion: Occasion, weather: Weather) -> Preferences {
        Preferences {
            mood,
            occasion,
            weather,
            time_of_day: TimeOfDay::Day,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // -- score terms ----------------------------------------------------------

    #[test]
    fn occasion_bonus_only_for_suitable_kinds() {
        assert!(approx(base_score(GarmentKind::Shirt, Occasion::Formal), 2.0));
        assert!(approx(base_score(GarmentKind::Skirt, Occasion::Formal), 1.0));
        assert!(approx(base_score(GarmentKind::Skirt, Occasion::Party), 2.0));
        assert!(approx(base_score(GarmentKind::Shorts, Occasion::Sports), 2.0));
        assert!(approx(base_score(GarmentKind::Jacket, Occasion::Casual), 1.0));
        assert!(approx(base_score(GarmentKind::Other, Occasion::Unspecified), 1.0));
    }

    #[test]
    fn weather_modifiers() {
        assert!(approx(weather_modifier(Weather::Cold, GarmentKind::Jacket), 1.0));
        assert!(approx(weather_modifier(Weather::Cold, GarmentKind::Pants), 0.0));
        assert!(approx(weather_modifier(Weather::Hot, GarmentKind::Jacket), -0.5));
        assert!(approx(weather_modifier(Weather::Hot, GarmentKind::Pants), -0.5));
        assert!(approx(weather_modifier(Weather::Hot, GarmentKind::Shorts), 0.0));
    }

    #[test]
    fn recency_bonus_bands() {
        assert!(approx(recency_bonus(0), 0.5));
        assert!(approx(recency_bonus(1), 0.2));
        assert!(approx(recency_bonus(2), 0.2));
        assert!(approx(recency_bonus(3), 0.0));
        assert!(approx(recency_bonus(9), 0.0));
        assert!(approx(recency_bonus(10), -0.3));
        assert!(approx(recency_bonus(500), -0.3));
    }

    #[test]
    fn recency_bonus_never_increases() {
        let mut prev = recency_bonus(0);
        for n in 1..50 {
            let next = recency_bonus(n);
            assert!(next <= prev, "bonus increased at usage {n}");
            prev = next;
        }
    }

    #[test]
    fn time_of_day_does_not_change_score() {
        let mut p = prefs(Mood::Happy, Occasion::Formal, Weather::Cold);
        let baseline = score(GarmentKind::Jacket, 0, &p);
        for t in [TimeOfDay::Morning, TimeOfDay::Night, TimeOfDay::Unspecified] {
            p.time_of_day = t;
            assert!(approx(score(GarmentKind::Jacket, 0, &p), baseline));
        }
    }

    // -- selection ------------------------------------------------------------

    #[test]
    fn formal_cold_scenario_picks_jacket_and_pants() {
        let items = vec![item(0, "jacket", 0), item(1, "pants", 5)];
        let p = prefs(Mood::Happy, Occasion::Formal, Weather::Cold);

        assert!(approx(score(GarmentKind::Jacket, 0, &p), 3.8));
        assert!(approx(score(GarmentKind::Pants, 5, &p), 2.3));

        let outfit = recommend(&items, &p).unwrap();
        assert_eq!(outfit.top.slot, 0);
        assert_eq!(outfit.bottom.slot, 1);
    }

    #[test]
    fn empty_inventory_yields_none() {
        let items: Vec<Item> = Vec::new();
        assert!(recommend(&items, &Preferences::default()).is_none());
    }

    #[test]
    fn only_tops_yields_none() {
        let items = vec![item(0, "shirt", 0), item(1, "jacket", 3), item(2, "tshirt", 1)];
        assert!(recommend(&items, &Preferences::default()).is_none());
    }

    #[test]
    fn unknown_kinds_are_ignored() {
        let items = vec![item(0, "scarf", 0), item(1, "hat", 0)];
        assert!(recommend(&items, &Preferences::default()).is_none());

        let items = vec![item(0, "scarf", 0), item(1, "shirt", 0), item(2, "skirt", 0)];
        let outfit = recommend(&items, &Preferences::default()).unwrap();
        assert_eq!(outfit.top.slot, 1);
        assert_eq!(outfit.bottom.slot, 2);
    }

    #[test]
    fn ties_go_to_first_encountered() {
        let items = vec![
            item(3, "shirt", 0),
            item(4, "shirt", 0),
            item(5, "pants", 0),
            item(6, "pants", 0),
        ];
        let outfit = recommend(&items, &Preferences::default()).unwrap();
        assert_eq!(outfit.top.slot, 3);
        assert_eq!(outfit.bottom.slot, 5);
    }

    #[test]
    fn less_worn_garment_wins() {
        let items = vec![item(0, "shirt", 12), item(1, "shirt", 0), item(2, "skirt", 4)];
        let outfit = recommend(&items, &Preferences::default()).unwrap();
        assert_eq!(outfit.top.slot, 1);
    }

    #[test]
    fn hot_weather_prefers_shorts_over_pants() {
        let items = vec![item(0, "tshirt", 0), item(1, "pants", 0), item(2, "shorts", 0)];
        let p = prefs(Mood::Neutral, Occasion::Casual, Weather::Hot);
        let outfit = recommend(&items, &p).unwrap();
        assert_eq!(outfit.bottom.slot, 2);
    }

    #[test]
    fn recommendation_is_deterministic() {
        let items = vec![
            item(0, "jacket", 2),
            item(1, "skirt", 0),
            item(2, "shirt", 1),
            item(3, "pants", 11),
        ];
        let p = prefs(Mood::Energetic, Occasion::Party, Weather::Mild);
        let first = recommend(&items, &p);
        for _ in 0..10 {
            assert_eq!(recommend(&items, &p), first);
        }
    }
}
