//! Linux sysfs GPIO pins and a thread-sleep delay.
//!
//! Lets [`StepperEmitter`] run on a single-board computer without a
//! chip-specific HAL. Pins are configured by BCM number; the sysfs line is
//! the BCM number plus the base of the GPIO chip (`gpiochipN/base`). That
//! base is `0` on older Raspberry Pi kernels and `512` from kernel 6.6 on.

use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::emitter::StepperEmitter;
use crate::error::MotionError;

const SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";

/// udev applies permissions to a freshly exported line asynchronously.
const EXPORT_SETTLE_ATTEMPTS: u32 = 20;
const EXPORT_SETTLE_INTERVAL: Duration = Duration::from_millis(10);

/// I/O failure on a sysfs GPIO line.
#[derive(Debug, thiserror::Error)]
#[error("GPIO {pin}: {source}")]
pub struct SysfsGpioError {
    pub pin: u32,
    #[source]
    pub source: std::io::Error,
}

impl embedded_hal::digital::Error for SysfsGpioError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// An exported sysfs GPIO line configured as an output.
#[derive(Debug)]
pub struct SysfsPin {
    pin: u32,
    value: File,
}

impl SysfsPin {
    /// Export sysfs line `pin` (if needed), set it as an output and open
    /// its value file.
    pub fn open(pin: u32) -> Result<Self, SysfsGpioError> {
        Self::open_in(Path::new(SYSFS_GPIO_ROOT), pin)
    }

    fn open_in(root: &Path, pin: u32) -> Result<Self, SysfsGpioError> {
        let wrap = |source| SysfsGpioError { pin, source };
        let line: PathBuf = root.join(format!("gpio{pin}"));

        let exported = !line.exists();
        if exported {
            std::fs::write(root.join("export"), pin.to_string()).map_err(wrap)?;
        }
        set_output(&line, exported).map_err(wrap)?;
        let value = OpenOptions::new()
            .write(true)
            .open(line.join("value"))
            .map_err(wrap)?;

        Ok(Self { pin, value })
    }

    fn write_level(&mut self, high: bool) -> Result<(), SysfsGpioError> {
        let level: &[u8] = if high { b"1" } else { b"0" };
        self.value
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.value.write_all(level))
            .map_err(|source| SysfsGpioError {
                pin: self.pin,
                source,
            })
    }
}

/// Write `out` to the line's direction file.
///
/// Right after an export the file may not exist yet or may still be
/// root-owned, so those two errors are retried for a short while.
fn set_output(line: &Path, exported: bool) -> std::io::Result<()> {
    let attempts = if exported { EXPORT_SETTLE_ATTEMPTS } else { 1 };
    let mut attempt = 1;
    loop {
        match std::fs::write(line.join("direction"), "out") {
            Err(e)
                if attempt < attempts
                    && matches!(
                        e.kind(),
                        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
                    ) =>
            {
                attempt += 1;
                std::thread::sleep(EXPORT_SETTLE_INTERVAL);
            }
            result => return result,
        }
    }
}

impl ErrorType for SysfsPin {
    type Error = SysfsGpioError;
}

impl OutputPin for SysfsPin {
    fn set_low(&mut self) -> Result<(), SysfsGpioError> {
        self.write_level(false)
    }

    fn set_high(&mut self) -> Result<(), SysfsGpioError> {
        self.write_level(true)
    }
}

/// Blocking delay backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

/// BCM pin numbers for the stepper driver lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperPins {
    pub step: u32,
    pub dir: u32,
    pub enable: u32,
    /// Base of the GPIO chip the pins belong to.
    pub chip_base: u32,
}

impl StepperPins {
    /// Sysfs line number of a BCM pin on this chip.
    pub fn line(&self, bcm: u32) -> u32 {
        self.chip_base + bcm
    }
}

/// Stepper backend wired through sysfs GPIO.
pub type SysfsStepper = StepperEmitter<SysfsPin, SysfsPin, SysfsPin, StdDelay>;

/// Open the three driver lines and build a disabled stepper backend.
pub fn open_stepper(pins: StepperPins, half_period_us: u32) -> Result<SysfsStepper, MotionError> {
    let unavailable = |e: SysfsGpioError| MotionError::HardwareUnavailable(e.to_string());
    let step = SysfsPin::open(pins.line(pins.step)).map_err(unavailable)?;
    let dir = SysfsPin::open(pins.line(pins.dir)).map_err(unavailable)?;
    let enable = SysfsPin::open(pins.line(pins.enable)).map_err(unavailable)?;
    StepperEmitter::new(step, dir, enable, StdDelay, half_period_us)
        .map_err(|e| MotionError::HardwareUnavailable(e.to_string()))
}
