//! Device registers
//!
//! Two register layouts are exposed: the status register and the flag status
//! register. Every register access names the layout explicitly through
//! [`RegisterKind`]; the layout is never inferred from the value.

mod flag_status;
mod status;

pub use flag_status::FlagStatusRegister;
pub use status::StatusRegister;

use crate::spi::opcodes;

/// Which register layout a read or write refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterKind {
    /// Status register
    Status,
    /// Flag status register
    FlagStatus,
}

impl RegisterKind {
    /// Opcode that reads this register
    pub const fn read_opcode(&self) -> u8 {
        match self {
            Self::Status => opcodes::RDSR,
            Self::FlagStatus => opcodes::RDFSR,
        }
    }

    /// Opcode that writes this register, if it can be written directly
    ///
    /// The flag status register is only cleared, through the
    /// [`BareCommand::ClearFlagStatus`](crate::spi::BareCommand) command.
    pub const fn write_opcode(&self) -> Option<u8> {
        match self {
            Self::Status => Some(opcodes::WRSR),
            Self::FlagStatus => None,
        }
    }
}

impl core::fmt::Display for RegisterKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegisterKind::Status => write!(f, "status register"),
            RegisterKind::FlagStatus => write!(f, "flag status register"),
        }
    }
}

/// A register value tagged with its layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Status register value
    Status(StatusRegister),
    /// Flag status register value
    FlagStatus(FlagStatusRegister),
}

impl Register {
    /// Decode a raw byte read from the register `kind`
    pub const fn from_raw(kind: RegisterKind, raw: u8) -> Self {
        match kind {
            RegisterKind::Status => Register::Status(StatusRegister::from_bits_retain(raw)),
            RegisterKind::FlagStatus => {
                Register::FlagStatus(FlagStatusRegister::from_bits_retain(raw))
            }
        }
    }

    /// The layout of this value
    pub const fn kind(&self) -> RegisterKind {
        match self {
            Register::Status(_) => RegisterKind::Status,
            Register::FlagStatus(_) => RegisterKind::FlagStatus,
        }
    }

    /// The raw register byte
    pub const fn raw(&self) -> u8 {
        match self {
            Register::Status(sr) => sr.bits(),
            Register::FlagStatus(fsr) => fsr.bits(),
        }
    }

    /// The status register value, if this is one
    pub const fn as_status(&self) -> Option<StatusRegister> {
        match self {
            Register::Status(sr) => Some(*sr),
            Register::FlagStatus(_) => None,
        }
    }

    /// The flag status register value, if this is one
    pub const fn as_flag_status(&self) -> Option<FlagStatusRegister> {
        match self {
            Register::FlagStatus(fsr) => Some(*fsr),
            Register::Status(_) => None,
        }
    }
}

impl From<StatusRegister> for Register {
    fn from(sr: StatusRegister) -> Self {
        Register::Status(sr)
    }
}

impl From<FlagStatusRegister> for Register {
    fn from(fsr: FlagStatusRegister) -> Self {
        Register::FlagStatus(fsr)
    }
}
