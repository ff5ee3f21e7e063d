use crate::emitter::{PulseEmitter, PulseError};
use crate::plan::Direction;

/// Logs intended motion instead of touching hardware.
#[derive(Debug, Default)]
pub struct SimulatedEmitter {
    total_pulses: u64,
}

impl SimulatedEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pulses "emitted" since construction.
    pub fn total_pulses(&self) -> u64 {
        self.total_pulses
    }
}

impl PulseEmitter for SimulatedEmitter {
    fn emit_pulses(&mut self, direction: Direction, count: u32) -> Result<(), PulseError> {
        tracing::info!(?direction, count, "Simulated pulse train");
        self.total_pulses += u64::from(count);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "simulated"
    }
}
