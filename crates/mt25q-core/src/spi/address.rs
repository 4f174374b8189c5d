//! Address mode and width types

/// Address mode latched in the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// 3-byte addressing (up to 16 MiB)
    #[default]
    ThreeByte,
    /// 4-byte addressing (up to 4 GiB)
    FourByte,
}

impl AddressMode {
    /// Returns true for 4-byte addressing
    pub const fn is_four_byte(&self) -> bool {
        matches!(self, Self::FourByte)
    }

    /// Returns the width of an address sent in this mode
    pub const fn width(&self) -> AddressWidth {
        match self {
            Self::ThreeByte => AddressWidth::ThreeByte,
            Self::FourByte => AddressWidth::FourByte,
        }
    }
}

impl From<bool> for AddressMode {
    fn from(four_byte: bool) -> Self {
        if four_byte {
            AddressMode::FourByte
        } else {
            AddressMode::ThreeByte
        }
    }
}

/// Address width for SPI commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AddressWidth {
    /// No address phase
    #[default]
    None,
    /// 3-byte (24-bit) address - supports up to 16 MiB
    ThreeByte,
    /// 4-byte (32-bit) address - supports up to 4 GiB
    FourByte,
}

impl AddressWidth {
    /// Returns the number of address bytes
    pub const fn bytes(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::ThreeByte => 3,
            Self::FourByte => 4,
        }
    }

    /// Returns the part of `address` the device actually sees
    pub const fn truncate(&self, address: u32) -> u32 {
        match self {
            Self::None => 0,
            Self::ThreeByte => address & 0x00FF_FFFF,
            Self::FourByte => address,
        }
    }

    /// Encode an address into bytes, most significant byte first
    pub fn encode(&self, address: u32, buf: &mut [u8]) {
        match self {
            Self::None => {}
            Self::ThreeByte => {
                buf[0] = (address >> 16) as u8;
                buf[1] = (address >> 8) as u8;
                buf[2] = address as u8;
            }
            Self::FourByte => {
                buf[..4].copy_from_slice(&address.to_be_bytes());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_three_byte_drops_top_byte() {
        let mut buf = [0u8; 4];
        AddressWidth::ThreeByte.encode(0x12_34_56_78, &mut buf);
        assert_eq!(&buf[..3], &[0x34, 0x56, 0x78]);
        assert_eq!(AddressWidth::ThreeByte.truncate(0x12_34_56_78), 0x34_56_78);
    }

    #[test]
    fn test_encode_four_byte() {
        let mut buf = [0u8; 4];
        AddressWidth::FourByte.encode(0x03_FF_FF_00, &mut buf);
        assert_eq!(buf, [0x03, 0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_mode_width() {
        assert_eq!(AddressMode::from(true), AddressMode::FourByte);
        assert_eq!(AddressMode::from(false).width().bytes(), 3);
        assert_eq!(AddressMode::FourByte.width().bytes(), 4);
    }
}
