//! Situational inputs for outfit recommendation.
//!
//! Each input arrives from the kiosk as a free-form string. Unknown values
//! are coerced to an explicit `Unspecified` variant at deserialization
//! time, so scoring only ever sees a closed vocabulary and never errors on
//! unrecognized words.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// How the user feels today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Mood {
    Happy,
    Tired,
    Energetic,
    Neutral,
    Unspecified,
}

impl Mood {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "happy" => Self::Happy,
            "tired" => Self::Tired,
            "energetic" => Self::Energetic,
            "neutral" => Self::Neutral,
            _ => Self::Unspecified,
        }
    }
}

impl From<String> for Mood {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// What the outfit is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Occasion {
    Formal,
    Party,
    Sports,
    Casual,
    Unspecified,
}

impl Occasion {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "formal" => Self::Formal,
            "party" => Self::Party,
            "sports" => Self::Sports,
            "casual" => Self::Casual,
            _ => Self::Unspecified,
        }
    }
}

impl From<String> for Occasion {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Current weather outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Weather {
    Cold,
    Hot,
    Mild,
    Unspecified,
}

impl Weather {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "cold" => Self::Cold,
            "hot" => Self::Hot,
            "mild" => Self::Mild,
            _ => Self::Unspecified,
        }
    }
}

impl From<String> for Weather {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Time of day. Accepted and carried through, but not scored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
    Night,
    Unspecified,
}

impl TimeOfDay {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "morning" => Self::Morning,
            "day" => Self::Day,
            "evening" => Self::Evening,
            "night" => Self::Night,
            _ => Self::Unspecified,
        }
    }
}

impl From<String> for TimeOfDay {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// The full set of situational inputs for one recommendation.
///
/// Missing or `null` fields take the kiosk defaults: neutral mood, casual
/// occasion, mild weather, daytime. A value that is not a string at all
/// is treated like an unknown word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, deserialize_with = "lenient")]
    pub mood: Mood,
    #[serde(default, deserialize_with = "lenient")]
    pub occasion: Occasion,
    #[serde(default, deserialize_with = "lenient")]
    pub weather: Weather,
    #[serde(default, deserialize_with = "lenient", alias = "timeOfDay")]
    pub time_of_day: TimeOfDay,
}

impl Default for Mood {
    fn default() -> Self {
        Self::Neutral
    }
}

impl Default for Occasion {
    fn default() -> Self {
        Self::Casual
    }
}

impl Default for Weather {
    fn default() -> Self {
        Self::Mild
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::Day
    }
}

/// Any JSON value a kiosk might send for a preference field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Other(IgnoredAny),
}

/// `null` -> default, string -> parsed word, anything else -> unspecified.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + From<String>,
{
    Ok(match Option::<RawValue>::deserialize(deserializer)? {
        None => T::default(),
        Some(RawValue::Text(word)) => T::from(word),
        Some(RawValue::Other(_)) => T::from(String::new()),
    })
}
