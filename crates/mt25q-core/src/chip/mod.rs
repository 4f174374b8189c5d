//! Chip identification
//!
//! This module decodes the Read ID record and maps capacity codes to
//! MT25Q densities.

pub mod database;
mod types;

pub use database::{find_by_size_code, Density, DENSITIES};
pub use types::{Identification, SupplyVoltage, MAX_THREE_BYTE_SIZE_CODE};
