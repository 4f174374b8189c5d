//! SPI wire modes

/// Number of parallel lines used by one phase of a transaction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WireWidth {
    /// Phase is absent
    #[default]
    None,
    /// One line (standard SPI)
    Single,
    /// Two lines
    Dual,
    /// Four lines
    Quad,
}

impl WireWidth {
    /// Returns the number of lines, 0 when the phase is absent
    pub const fn lines(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Single => 1,
            Self::Dual => 2,
            Self::Quad => 4,
        }
    }

    /// Returns true if the phase takes place at all
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// SPI wire mode the device is driven in
///
/// The mode only changes the data phase of array reads and page programs
/// (1-1-1, 1-1-2 or 1-1-4). Opcodes and addresses always go out on a
/// single line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SpiMode {
    /// Standard SPI: 1-1-1
    #[default]
    Standard,
    /// Dual output SPI: 1-1-2
    Dual,
    /// Quad output SPI: 1-1-4
    Quad,
}

impl SpiMode {
    /// Returns the wire width of the data phase for array reads and programs
    pub const fn data_width(&self) -> WireWidth {
        match self {
            Self::Standard => WireWidth::Single,
            Self::Dual => WireWidth::Dual,
            Self::Quad => WireWidth::Quad,
        }
    }
}

impl core::fmt::Display for SpiMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpiMode::Standard => write!(f, "standard (1-1-1)"),
            SpiMode::Dual => write!(f, "dual (1-1-2)"),
            SpiMode::Quad => write!(f, "quad (1-1-4)"),
        }
    }
}
