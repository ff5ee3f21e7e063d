use closet_core::types::Slot;
use serde::Serialize;

use crate::error::MotionError;

/// Physical carousel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselConfig {
    slot_count: Slot,
    steps_per_revolution: u32,
}

impl CarouselConfig {
    /// Validate and build a carousel configuration.
    ///
    /// Rules:
    /// - At least one slot.
    /// - At least one motor step per slot.
    pub fn new(slot_count: Slot, steps_per_revolution: u32) -> Result<Self, MotionError> {
        if slot_count == 0 {
            return Err(MotionError::InvalidConfig(
                "slot_count must be at least 1".to_string(),
            ));
        }
        if steps_per_revolution < slot_count {
            return Err(MotionError::InvalidConfig(format!(
                "steps_per_revolution ({steps_per_revolution}) must be at least slot_count ({slot_count})"
            )));
        }
        Ok(Self {
            slot_count,
            steps_per_revolution,
        })
    }

    pub fn slot_count(&self) -> Slot {
        self.slot_count
    }

    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Motor steps between adjacent slots.
    ///
    /// Integer division: any remainder of `steps_per_revolution` is dropped
    /// and not carried between rotations.
    pub fn steps_per_slot(&self) -> u32 {
        self.steps_per_revolution / self.slot_count
    }

    /// Convert a caller-supplied slot into a [`Slot`] on this carousel.
    pub fn check_slot(&self, slot: i64) -> Result<Slot, MotionError> {
        Slot::try_from(slot)
            .ok()
            .filter(|s| *s < self.slot_count)
            .ok_or(MotionError::InvalidSlot {
                slot,
                slot_count: self.slot_count,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn rejects_zero_slots() {
        assert_matches!(CarouselConfig::new(0, 200), Err(MotionError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_fewer_steps_than_slots() {
        assert_matches!(CarouselConfig::new(40, 39), Err(MotionError::InvalidConfig(_)));
    }

    #[test]
    fn steps_per_slot_truncates() {
        let config = CarouselConfig::new(40, 200).unwrap();
        assert_eq!(config.steps_per_slot(), 5);

        let config = CarouselConfig::new(3, 200).unwrap();
        assert_eq!(config.steps_per_slot(), 66);
    }

    #[test]
    fn check_slot_bounds() {
        let config = CarouselConfig::new(8, 200).unwrap();
        assert_eq!(config.check_slot(7).unwrap(), 7);
        assert_matches!(
            config.check_slot(8),
            Err(MotionError::InvalidSlot { slot: 8, slot_count: 8 })
        );
        assert_matches!(config.check_slot(-3), Err(MotionError::InvalidSlot { .. }));
    }
}
