//! Flag status register (RDFSR 0x70, cleared by CLFSR 0x50)

use bitflags::bitflags;

bitflags! {
    /// Flag status register bits
    ///
    /// ```text
    ///  b7     b6     b5     b4    b3    b2     b1     b0
    /// READY  E_SUS  E_ERR  P_ERR  res  P_SUS  PROT  ADDR4
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FlagStatusRegister: u8 {
        /// 4-byte addressing is active
        const ADDR_4BYTE = 1 << 0;
        /// Last operation hit a protected area
        const PROTECTION_ERROR = 1 << 1;
        /// A program operation is suspended
        const PROGRAM_SUSPENDED = 1 << 2;
        /// Reserved
        const RESERVED = 1 << 3;
        /// Program failure or protection error
        const PROGRAM_ERROR = 1 << 4;
        /// Erase failure or protection error
        const ERASE_ERROR = 1 << 5;
        /// An erase operation is suspended
        const ERASE_SUSPENDED = 1 << 6;
        /// Program/erase controller ready (inverse of the status WIP bit)
        const READY = 1 << 7;

        /// Error bits cleared by CLFSR
        const ERRORS = Self::PROTECTION_ERROR.bits()
            | Self::PROGRAM_ERROR.bits()
            | Self::ERASE_ERROR.bits();
    }
}

impl FlagStatusRegister {
    /// Returns true if the program/erase controller is idle
    pub const fn is_ready(&self) -> bool {
        self.contains(Self::READY)
    }

    /// Returns true if the device is in 4-byte address mode
    pub const fn is_four_byte(&self) -> bool {
        self.contains(Self::ADDR_4BYTE)
    }

    /// Returns true if any program, erase or protection error is latched
    pub const fn has_error(&self) -> bool {
        self.intersects(Self::ERRORS)
    }

    /// Returns true if a program or erase is suspended
    pub const fn is_suspended(&self) -> bool {
        self.intersects(Self::PROGRAM_SUSPENDED.union(Self::ERASE_SUSPENDED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        assert_eq!(FlagStatusRegister::ADDR_4BYTE.bits(), 0x01);
        assert_eq!(FlagStatusRegister::PROTECTION_ERROR.bits(), 0x02);
        assert_eq!(FlagStatusRegister::PROGRAM_SUSPENDED.bits(), 0x04);
        assert_eq!(FlagStatusRegister::PROGRAM_ERROR.bits(), 0x10);
        assert_eq!(FlagStatusRegister::ERASE_ERROR.bits(), 0x20);
        assert_eq!(FlagStatusRegister::ERASE_SUSPENDED.bits(), 0x40);
        assert_eq!(FlagStatusRegister::READY.bits(), 0x80);
    }

    #[test]
    fn test_decode() {
        let fsr = FlagStatusRegister::from_bits_retain(0x81);
        assert!(fsr.is_ready());
        assert!(fsr.is_four_byte());
        assert!(!fsr.has_error());
        assert!(!fsr.is_suspended());

        let fsr = FlagStatusRegister::from_bits_retain(0xA0);
        assert!(fsr.has_error());
        assert!(!fsr.is_four_byte());

        let fsr = FlagStatusRegister::from_bits_retain(0x40);
        assert!(fsr.is_suspended());
        assert!(!fsr.is_ready());
    }
}
