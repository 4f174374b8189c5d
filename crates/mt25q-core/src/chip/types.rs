//! Device identification record

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use super::database::{self, Density};
use crate::error::{Error, Result};
use crate::spi::opcodes;

/// Largest size code that still fits in 3-byte addressing (128Mb)
pub const MAX_THREE_BYTE_SIZE_CODE: u8 = 0x18;

/// Response to the Read ID (0x9E) command
///
/// The layout matches the bytes on the wire, so the record is received
/// in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Identification {
    /// JEDEC manufacturer ID (0x20 for Micron)
    pub manufacturer: u8,
    /// Memory type (0xBA: 3 V, 0xBB: 1.8 V)
    pub device_type: u8,
    /// Memory capacity code
    pub size_code: u8,
    /// Extended ID, device configuration and factory unique ID
    pub unique_id: [u8; 17],
}

impl Identification {
    /// Size of the record on the wire
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Parse a record from the start of `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (id, _) = Self::read_from_prefix(bytes).map_err(|_| Error::BufferTooSmall)?;
        Ok(id)
    }

    /// Returns true if the manufacturer byte is Micron's
    pub const fn is_micron(&self) -> bool {
        self.manufacturer == opcodes::MICRON_MANUFACTURER_ID
    }

    /// Returns true if the array is larger than 128Mb and needs 4-byte addresses
    pub const fn requires_four_byte_addressing(&self) -> bool {
        self.size_code > MAX_THREE_BYTE_SIZE_CODE
    }

    /// Density entry for the reported size code
    pub fn density(&self) -> Option<&'static Density> {
        database::find_by_size_code(self.size_code)
    }

    /// Array size in bytes, if the size code is known
    pub fn capacity_bytes(&self) -> Option<u32> {
        self.density().map(Density::capacity_bytes)
    }

    /// Supply voltage class encoded in the device type byte
    pub const fn supply_voltage(&self) -> Option<SupplyVoltage> {
        match self.device_type {
            0xBA => Some(SupplyVoltage::V3),
            0xBB => Some(SupplyVoltage::V1_8),
            _ => None,
        }
    }
}

/// Supply voltage class of the part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplyVoltage {
    /// 3 V parts (MT25QL)
    V3,
    /// 1.8 V parts (MT25QU)
    V1_8,
}

impl core::fmt::Display for SupplyVoltage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SupplyVoltage::V3 => write!(f, "3V"),
            SupplyVoltage::V1_8 => write!(f, "1.8V"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(size_code: u8) -> Identification {
        let mut bytes = [0u8; Identification::SIZE];
        bytes[0] = 0x20;
        bytes[1] = 0xBA;
        bytes[2] = size_code;
        Identification::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_record_size() {
        assert_eq!(Identification::SIZE, 20);
    }

    #[test]
    fn test_four_byte_threshold() {
        assert!(id(0x20).requires_four_byte_addressing());
        assert!(id(0x19).requires_four_byte_addressing());
        assert!(!id(0x18).requires_four_byte_addressing());
        assert!(!id(0x17).requires_four_byte_addressing());
    }

    #[test]
    fn test_decode_fields() {
        let mut bytes = [0u8; Identification::SIZE];
        bytes[0] = 0x20;
        bytes[1] = 0xBB;
        bytes[2] = 0x21;
        bytes[3] = 0x10;
        bytes[19] = 0x5A;
        let id = Identification::from_bytes(&bytes).unwrap();
        assert!(id.is_micron());
        assert_eq!(id.supply_voltage(), Some(SupplyVoltage::V1_8));
        assert_eq!(id.capacity_bytes(), Some(128 * 1024 * 1024));
        assert_eq!(id.unique_id[0], 0x10);
        assert_eq!(id.unique_id[16], 0x5A);
        assert_eq!(id.as_bytes(), &bytes);
    }

    #[test]
    fn test_short_buffer() {
        assert_eq!(
            Identification::from_bytes(&[0x20, 0xBA]),
            Err(Error::BufferTooSmall)
        );
    }
}
