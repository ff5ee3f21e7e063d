//! Rotation control for the garment carousel.
//!
//! Converts a target slot into a direction and step count along the
//! shortest path, drives a [`PulseEmitter`] and tracks the carousel's
//! orientation. Control is open-loop: there is no position sensor, so a
//! fault mid-rotation leaves the position unknown until the carousel is
//! re-homed.

pub mod config;
pub mod controller;
pub mod emitter;
pub mod error;
pub mod plan;

pub use config::CarouselConfig;
pub use controller::{Position, RotationController};
pub use emitter::{PulseEmitter, PulseError, SimulatedEmitter, StepperEmitter};
pub use error::MotionError;
pub use plan::{plan_rotation, Direction, RotationPlan};
