//! Step/direction driver backend (A4988 and compatibles).
//!
//! Pin levels:
//!
//! | Signal | Level                               |
//! |--------|-------------------------------------|
//! | STEP   | one high/low cycle per motor step    |
//! | DIR    | high = clockwise, low = CCW          |
//! | ENABLE | low = driver enabled (active low)    |
//!
//! The driver is enabled only for the duration of a pulse train and is
//! always disabled again afterwards, even when a pulse fails.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, OutputPin};

use crate::emitter::{PulseEmitter, PulseError};
use crate::plan::Direction;

/// Default half-period of a step pulse, in microseconds.
pub const DEFAULT_HALF_PERIOD_US: u32 = 2_000;

/// Drives a step/direction stepper driver through `embedded-hal` pins.
pub struct StepperEmitter<STEP, DIR, EN, D> {
    step: STEP,
    dir: DIR,
    enable: EN,
    delay: D,
    half_period_us: u32,
}

impl<STEP, DIR, EN, D> StepperEmitter<STEP, DIR, EN, D>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the driver pins and leave the driver disabled.
    pub fn new(
        step: STEP,
        dir: DIR,
        enable: EN,
        delay: D,
        half_period_us: u32,
    ) -> Result<Self, PulseError> {
        let mut emitter = Self {
            step,
            dir,
            enable,
            delay,
            half_period_us,
        };
        emitter
            .step
            .set_low()
            .map_err(|e| pin_error("STEP", 0, e.kind()))?;
        emitter.set_enabled(false, 0)?;
        Ok(emitter)
    }

    fn set_enabled(&mut self, enabled: bool, emitted: u32) -> Result<(), PulseError> {
        let result = if enabled {
            self.enable.set_low()
        } else {
            self.enable.set_high()
        };
        result.map_err(|e| pin_error("ENABLE", emitted, e.kind()))
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), PulseError> {
        let result = match direction {
            Direction::Clockwise => self.dir.set_high(),
            Direction::CounterClockwise => self.dir.set_low(),
        };
        result.map_err(|e| pin_error("DIR", 0, e.kind()))
    }

    fn pulse_train(&mut self, count: u32) -> Result<(), PulseError> {
        for emitted in 0..count {
            self.step
                .set_high()
                .map_err(|e| pin_error("STEP", emitted, e.kind()))?;
            self.delay.delay_us(self.half_period_us);
            self.step
                .set_low()
                .map_err(|e| pin_error("STEP", emitted, e.kind()))?;
            self.delay.delay_us(self.half_period_us);
        }
        Ok(())
    }
}

impl<STEP, DIR, EN, D> PulseEmitter for StepperEmitter<STEP, DIR, EN, D>
where
    STEP: OutputPin + Send,
    DIR: OutputPin + Send,
    EN: OutputPin + Send,
    D: DelayNs + Send,
{
    fn emit_pulses(&mut self, direction: Direction, count: u32) -> Result<(), PulseError> {
        self.set_direction(direction)?;
        self.set_enabled(true, 0)?;

        let result = self.pulse_train(count);
        let emitted = match &result {
            Ok(()) => count,
            Err(e) => e.emitted,
        };
        let disabled = self.set_enabled(false, emitted);

        result?;
        disabled
    }

    fn backend(&self) -> &'static str {
        "gpio"
    }
}

fn pin_error(pin: &str, emitted: u32, kind: embedded_hal::digital::ErrorKind) -> PulseError {
    PulseError::new(emitted, format!("{pin} pin error: {kind:?}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
