//! Device configuration
//!
//! The defaults reproduce the datasheet timings of the MT25Q family. A
//! configuration can also be loaded from a RON document when the `std`
//! feature is enabled:
//!
//! ```ignore
//! let config = DeviceConfig::from_ron("(spi_mode: Quad, timings: (bulk_erase_ms: 240000))")?;
//! ```

use crate::spi::{EraseSize, SpiMode};

/// Number of wait-idle attempts allowed between init steps
pub const DEFAULT_INIT_IDLE_RETRIES: u32 = 10;

/// Fixed delays applied by the driver, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct Timings {
    /// Sleep before each busy check while waiting for idle
    pub poll_interval_ms: u32,
    /// Settling time after every page program
    pub program_settle_ms: u32,
    /// Nominal 4KB subsector erase time
    pub erase_4k_ms: u32,
    /// Nominal 32KB subsector erase time
    pub erase_32k_ms: u32,
    /// Nominal bulk erase time
    pub bulk_erase_ms: u32,
}

impl Timings {
    /// Datasheet timings
    pub const DATASHEET: Timings = Timings {
        poll_interval_ms: 1,
        program_settle_ms: 1,
        erase_4k_ms: 50,
        erase_32k_ms: 100,
        bulk_erase_ms: 153_000,
    };

    /// Nominal time to sleep after issuing an erase of `size`
    pub const fn erase_delay_ms(&self, size: EraseSize) -> u32 {
        match size {
            EraseSize::Subsector4K => self.erase_4k_ms,
            EraseSize::Subsector32K => self.erase_32k_ms,
            EraseSize::Bulk => self.bulk_erase_ms,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::DATASHEET
    }
}

/// Configuration applied when a device handle is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct DeviceConfig {
    /// Wire mode used for array reads and programs
    pub spi_mode: SpiMode,
    /// Wait-idle budget of each idle wait in the init sequence
    pub init_idle_retries: u32,
    /// Fixed delays
    pub timings: Timings,
}

impl DeviceConfig {
    /// Default configuration with the given wire mode
    pub const fn new(spi_mode: SpiMode) -> Self {
        Self {
            spi_mode,
            init_idle_retries: DEFAULT_INIT_IDLE_RETRIES,
            timings: Timings::DATASHEET,
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new(SpiMode::default())
    }
}

/// Errors raised while loading a configuration
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Document is not valid RON for a device configuration
    #[error("invalid device configuration: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[cfg(feature = "std")]
impl DeviceConfig {
    /// Parse a configuration from a RON document
    ///
    /// Missing fields keep their default value.
    pub fn from_ron(text: &str) -> core::result::Result<Self, ConfigError> {
        let config: DeviceConfig = ron::from_str(text)?;
        log::debug!(
            "Loaded device config: {} mode, {} init retries",
            config.spi_mode,
            config.init_idle_retries
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeviceConfig::default();
        assert_eq!(config.spi_mode, SpiMode::Standard);
        assert_eq!(config.init_idle_retries, 10);
        assert_eq!(config.timings.erase_delay_ms(EraseSize::Subsector4K), 50);
        assert_eq!(config.timings.erase_delay_ms(EraseSize::Subsector32K), 100);
        assert_eq!(config.timings.erase_delay_ms(EraseSize::Bulk), 153_000);
        assert_eq!(config.timings.program_settle_ms, 1);
        assert_eq!(config.timings.poll_interval_ms, 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_from_ron_partial() {
        let config =
            DeviceConfig::from_ron("(spi_mode: Quad, timings: (bulk_erase_ms: 240000))").unwrap();
        assert_eq!(config.spi_mode, SpiMode::Quad);
        assert_eq!(config.init_idle_retries, DEFAULT_INIT_IDLE_RETRIES);
        assert_eq!(config.timings.bulk_erase_ms, 240_000);
        assert_eq!(config.timings.erase_4k_ms, 50);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_from_ron_rejects_unknown_mode() {
        assert!(DeviceConfig::from_ron("(spi_mode: Octal)").is_err());
    }
}
