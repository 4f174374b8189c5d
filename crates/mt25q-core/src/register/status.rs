//! Status register (RDSR 0x05 / WRSR 0x01)

use bitflags::bitflags;

bitflags! {
    /// Status register bits
    ///
    /// ```text
    ///  b7     b6   b5   b4   b3   b2   b1   b0
    /// SRWD   BP3   TB  BP2  BP1  BP0  WEL  WIP
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatusRegister: u8 {
        /// Write in progress: a program, erase or register write is running
        const WIP = 1 << 0;
        /// Write enable latch
        const WEL = 1 << 1;
        /// Block protect bit 0
        const BP0 = 1 << 2;
        /// Block protect bit 1
        const BP1 = 1 << 3;
        /// Block protect bit 2
        const BP2 = 1 << 4;
        /// Protected area starts at the bottom of the array instead of the top
        const TB = 1 << 5;
        /// Block protect bit 3
        const BP3 = 1 << 6;
        /// Status register write disable
        const SRWD = 1 << 7;

        /// BP2..BP0 field
        const BP_LOW = Self::BP0.bits() | Self::BP1.bits() | Self::BP2.bits();
    }
}

impl StatusRegister {
    /// Returns true while a program/erase/write-status cycle is running
    pub const fn is_busy(&self) -> bool {
        self.contains(Self::WIP)
    }

    /// Returns true if the write enable latch is set
    pub const fn write_enabled(&self) -> bool {
        self.contains(Self::WEL)
    }

    /// Returns true if the status register is locked against writes
    pub const fn write_disabled(&self) -> bool {
        self.contains(Self::SRWD)
    }

    /// Returns true if block protection counts from the bottom of the array
    pub const fn protects_bottom(&self) -> bool {
        self.contains(Self::TB)
    }

    /// Block protection level BP3..BP0 as a 4-bit value
    pub const fn block_protection(&self) -> u8 {
        let low = (self.bits() & Self::BP_LOW.bits()) >> 2;
        let high = (self.bits() & Self::BP3.bits()) >> 3;
        high | low
    }

    /// Returns a copy with BP3..BP0 replaced by the low 4 bits of `level`
    pub fn with_block_protection(self, level: u8) -> Self {
        let mut bits = self.bits() & !(Self::BP_LOW.bits() | Self::BP3.bits());
        bits |= (level & 0b0111) << 2;
        bits |= (level & 0b1000) << 3;
        Self::from_bits_retain(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        assert_eq!(StatusRegister::WIP.bits(), 0x01);
        assert_eq!(StatusRegister::WEL.bits(), 0x02);
        assert_eq!(StatusRegister::BP_LOW.bits(), 0b0001_1100);
        assert_eq!(StatusRegister::TB.bits(), 0x20);
        assert_eq!(StatusRegister::BP3.bits(), 0x40);
        assert_eq!(StatusRegister::SRWD.bits(), 0x80);
    }

    #[test]
    fn test_busy_follows_wip() {
        assert!(!StatusRegister::from_bits_retain(0x00).is_busy());
        assert!(StatusRegister::from_bits_retain(0x01).is_busy());
        // WEL alone is not busy
        assert!(!StatusRegister::from_bits_retain(0x02).is_busy());
        assert!(StatusRegister::from_bits_retain(0xFF).is_busy());
    }

    #[test]
    fn test_block_protection_field() {
        // BP3=1, TB=1, BP2..BP0=0b101
        let sr = StatusRegister::from_bits_retain(0b0111_0100);
        assert_eq!(sr.block_protection(), 0b1101);
        assert!(sr.protects_bottom());

        let sr = StatusRegister::WEL.with_block_protection(0b1010);
        assert_eq!(sr.bits(), 0b0100_1010);
        assert_eq!(sr.block_protection(), 0b1010);

        let cleared = sr.with_block_protection(0);
        assert_eq!(cleared, StatusRegister::WEL);
    }
}
