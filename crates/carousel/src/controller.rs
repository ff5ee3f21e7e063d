//! The carousel's single point of motion.
//!
//! One [`RotationController`] owns the motor backend and the orientation
//! state. Both sit behind one exclusive lock that is held for the whole of
//! a rotation, so two rotations never interleave their pulse trains.

use std::sync::{Mutex, MutexGuard};

use closet_core::types::Slot;
use serde::Serialize;

use crate::config::CarouselConfig;
use crate::emitter::PulseEmitter;
use crate::error::MotionError;
use crate::plan::{plan_rotation, RotationPlan};

/// The slot aligned with the pickup point at the home mark.
pub const HOME_SLOT: Slot = 0;

/// Where the carousel is believed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Position {
    Known { slot: Slot },
    /// A rotation was interrupted; external re-homing is required.
    Unknown,
}

struct MotionState {
    position: Position,
    emitter: Box<dyn PulseEmitter>,
}

/// Open-loop rotation controller.
pub struct RotationController {
    config: CarouselConfig,
    motion: Mutex<MotionState>,
}

impl RotationController {
    /// Build a controller that assumes the carousel starts at [`HOME_SLOT`].
    pub fn new(config: CarouselConfig, emitter: Box<dyn PulseEmitter>) -> Self {
        tracing::info!(
            slot_count = config.slot_count(),
            steps_per_revolution = config.steps_per_revolution(),
            backend = emitter.backend(),
            "Rotation controller ready at home slot",
        );
        Self {
            config,
            motion: Mutex::new(MotionState {
                position: Position::Known { slot: HOME_SLOT },
                emitter,
            }),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn position(&self) -> Position {
        self.lock().position
    }

    pub fn backend(&self) -> &'static str {
        self.lock().emitter.backend()
    }

    /// Rotate the carousel so `target` faces the pickup point.
    ///
    /// Blocks for the duration of the pulse train. On a fault the position
    /// becomes [`Position::Unknown`] and stays so until [`Self::rehome`].
    pub fn rotate_to(&self, target: Slot) -> Result<RotationPlan, MotionError> {
        self.config.check_slot(i64::from(target))?;

        let mut state = self.lock();
        let current = match state.position {
            Position::Known { slot } => slot,
            Position::Unknown => return Err(MotionError::PositionUnknown),
        };

        let plan = plan_rotation(&self.config, current, target)?;
        tracing::info!(
            from = plan.from,
            to = plan.to,
            direction = ?plan.direction,
            steps = plan.steps,
            "Rotating carousel",
        );

        if plan.steps > 0 {
            if let Err(e) = state.emitter.emit_pulses(plan.direction, plan.steps) {
                state.position = Position::Unknown;
                tracing::error!(
                    from = plan.from,
                    to = plan.to,
                    pulses_emitted = e.emitted,
                    steps = plan.steps,
                    error = %e.reason,
                    "Pulse train failed, carousel position unknown",
                );
                return Err(MotionError::Fault {
                    pulses_emitted: e.emitted,
                    reason: e.reason,
                });
            }
        }

        state.position = Position::Known { slot: target };
        Ok(plan)
    }

    /// Record that the carousel has been physically returned to its home
    /// mark. Does not move the motor.
    pub fn rehome(&self) -> Position {
        let mut state = self.lock();
        state.position = Position::Known { slot: HOME_SLOT };
        tracing::info!(slot = HOME_SLOT, "Carousel re-homed");
        state.position
    }

    /// Acquire the motion lock.
    ///
    /// A panic while the lock was held means a pulse train may have been
    /// cut short, so a poisoned lock is recovered with the position marked
    /// unknown.
    fn lock(&self) -> MutexGuard<'_, MotionState> {
        match self.motion.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                guard.position = Position::Unknown;
                self.motion.clear_poison();
                tracing::error!("Motion lock poisoned, carousel position unknown");
                guard
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
