//! Shortest-path rotation planning.
//!
//! ```text
//! delta = (target - current) mod n
//! delta >  n/2  -> counter-clockwise, (n - delta) * steps_per_slot
//! delta <= n/2  -> clockwise,          delta      * steps_per_slot
//! ```
//!
//! With an even slot count, a target exactly opposite the current slot
//! (`delta == n/2`) is reached clockwise. That tie-break is part of the
//! contract.

use closet_core::types::Slot;
use serde::Serialize;

use crate::config::CarouselConfig;
use crate::error::MotionError;

/// Motor rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// A computed move from one slot to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotationPlan {
    pub from: Slot,
    pub to: Slot,
    pub direction: Direction,
    pub steps: u32,
}

/// Plan the shortest rotation from `current` to `target`.
pub fn plan_rotation(
    config: &CarouselConfig,
    current: Slot,
    target: Slot,
) -> Result<RotationPlan, MotionError> {
    let n = config.slot_count();
    for slot in [current, target] {
        if slot >= n {
            return Err(MotionError::InvalidSlot {
                slot: i64::from(slot),
                slot_count: n,
            });
        }
    }

    let wide_n = u64::from(n);
    let delta = (u64::from(target) + wide_n - u64::from(current)) % wide_n;
    // delta < n, so it fits back into a Slot.
    let delta = delta as Slot;
    let (direction, slots_moved) = if 2 * u64::from(delta) > wide_n {
        (Direction::CounterClockwise, n - delta)
    } else {
        (Direction::Clockwise, delta)
    };

    Ok(RotationPlan {
        from: current,
        to: target,
        direction,
        steps: slots_moved * config.steps_per_slot(),
    })
}
