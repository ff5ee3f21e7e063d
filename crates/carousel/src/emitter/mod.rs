//! Pulse emission backends.
//!
//! The controller only knows the [`PulseEmitter`] capability. Which backend
//! drives it is decided once at startup:
//!
//! - [`SimulatedEmitter`] logs the motion it would perform (development).
//! - [`StepperEmitter`] toggles STEP/DIR/ENABLE lines of an A4988-style
//!   driver through `embedded-hal` pins.

pub mod simulated;
pub mod stepper;
pub mod sysfs;

pub use simulated::SimulatedEmitter;
pub use stepper::StepperEmitter;

use crate::plan::Direction;

/// A pulse train was interrupted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} (after {emitted} pulses)")]
pub struct PulseError {
    /// Pulses completed before the failure.
    pub emitted: u32,
    pub reason: String,
}

impl PulseError {
    pub fn new(emitted: u32, reason: impl Into<String>) -> Self {
        Self {
            emitted,
            reason: reason.into(),
        }
    }
}

/// Something that can move the carousel motor by discrete steps.
///
/// Implementations block until the whole pulse train has been emitted or
/// has failed.
pub trait PulseEmitter: Send {
    /// Emit `count` step pulses in `direction`.
    fn emit_pulses(&mut self, direction: Direction, count: u32) -> Result<(), PulseError>;

    /// Short backend name for logs and status reporting.
    fn backend(&self) -> &'static str;
}
