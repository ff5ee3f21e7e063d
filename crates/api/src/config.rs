use closet_carousel::emitter::sysfs::StepperPins;

/// Which pulse backend drives the carousel motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorBackend {
    /// Log intended motion only.
    Simulated,
    /// Drive a step/direction driver through sysfs GPIO.
    Gpio,
}

impl MotorBackend {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "simulated" => Some(Self::Simulated),
            "gpio" => Some(Self::Gpio),
            _ => None,
        }
    }
}

/// Carousel geometry and motor wiring.
#[derive(Debug, Clone)]
pub struct MotorConfig {
    /// Number of carousel slots (default: `40`).
    pub slot_count: u32,
    /// Motor steps per full carousel revolution (default: `200`).
    pub steps_per_revolution: u32,
    /// Pulse backend (default: simulated).
    pub backend: MotorBackend,
    /// BCM pin numbers of the driver lines (default: STEP 17, DIR 27, ENABLE 22)
    /// and the sysfs base of their GPIO chip (default: `0`).
    pub pins: StepperPins,
    /// Half-period of one step pulse in microseconds (default: `2000`).
    pub step_delay_us: u32,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for a kiosk running on the closet
/// itself. Override via environment variables or a `.env` file.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`). Covers a full
    /// two-slot delivery.
    pub request_timeout_secs: u64,
    /// SQLite database URL.
    pub database_url: String,
    pub motor: MotorConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                  |
    /// |------------------------|------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                |
    /// | `PORT`                 | `5000`                                   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                  |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                                     |
    /// | `DATABASE_URL`         | `sqlite://database/smart_closet.sqlite3` |
    /// | `CAROUSEL_SLOTS`       | `40`                                     |
    /// | `MOTOR_STEPS_PER_REV`  | `200`                                    |
    /// | `MOTOR_BACKEND`        | `simulated` (or `gpio`)                  |
    /// | `MOTOR_STEP_PIN`       | `17`                                     |
    /// | `MOTOR_DIR_PIN`        | `27`                                     |
    /// | `MOTOR_ENABLE_PIN`     | `22`                                     |
    /// | `MOTOR_GPIO_BASE`      | `0` (`512` on Raspberry Pi kernel 6.6+)  |
    /// | `STEP_DELAY_US`        | `2000`                                   |
    ///
    /// Malformed values panic: configuration is read once at startup and
    /// a misconfigured closet must not start.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://database/smart_closet.sqlite3".into());

        let backend = std::env::var("MOTOR_BACKEND").unwrap_or_else(|_| "simulated".into());
        let backend = MotorBackend::parse(&backend)
            .unwrap_or_else(|| panic!("MOTOR_BACKEND must be 'simulated' or 'gpio', got '{backend}'"));

        let motor = MotorConfig {
            slot_count: env_u32("CAROUSEL_SLOTS", 40),
            steps_per_revolution: env_u32("MOTOR_STEPS_PER_REV", 200),
            backend,
            pins: StepperPins {
                step: env_u32("MOTOR_STEP_PIN", 17),
                dir: env_u32("MOTOR_DIR_PIN", 27),
                enable: env_u32("MOTOR_ENABLE_PIN", 22),
                chip_base: env_u32("MOTOR_GPIO_BASE", 0),
            },
            step_delay_us: env_u32("STEP_DELAY_US", 2_000),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            motor,
        }
    }
}

fn env_u32(name: &str, default: u32) -> u32 {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid u32, got '{raw}'")),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motor_backend_parses_case_insensitively() {
        assert_eq!(MotorBackend::parse("GPIO"), Some(MotorBackend::Gpio));
        assert_eq!(MotorBackend::parse(" simulated "), Some(MotorBackend::Simulated));
        assert_eq!(MotorBackend::parse("servo"), None);
    }
}
