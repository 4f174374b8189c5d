//! Flash device handle and configuration

mod config;
mod device;

pub use config::{DeviceConfig, Timings, DEFAULT_INIT_IDLE_RETRIES};
#[cfg(feature = "std")]
pub use config::ConfigError;
pub use device::Mt25q;

/// Device state reported by busy checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceState {
    /// No program, erase or register write is running
    Idle,
    /// A program, erase or register write is still running
    Busy,
}

impl DeviceState {
    /// Returns true if the device is idle
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
