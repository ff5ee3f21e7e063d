use closet_core::types::Slot;

/// Errors surfaced by the rotation controller.
///
/// None of these are retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MotionError {
    /// Target slot outside `[0, slot_count)`. Caller input error.
    #[error("Slot {slot} is outside the carousel range [0, {slot_count})")]
    InvalidSlot { slot: i64, slot_count: Slot },

    /// Pulse emission failed partway. The physical position is unknown.
    #[error("Motion fault after {pulses_emitted} pulses: {reason}")]
    Fault { pulses_emitted: u32, reason: String },

    /// A previous fault left the position unknown; re-home first.
    #[error("Carousel position is unknown; re-home before rotating")]
    PositionUnknown,

    /// The motor backend could not be brought up.
    #[error("Motor hardware unavailable: {0}")]
    HardwareUnavailable(String),

    #[error("Invalid carousel configuration: {0}")]
    InvalidConfig(String),
}
