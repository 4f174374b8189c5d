//! Error types for mt25q-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.
//!
//! Every variant is a hard failure for the call that produced it. The
//! transient "device busy" condition is not an error: it is reported as
//! [`DeviceState::Busy`](crate::flash::DeviceState) by the busy-check and
//! wait-idle operations only. Callers of any other operation must treat
//! anything but `Ok` as failure.

use core::fmt;

use crate::register::RegisterKind;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // Transport errors
    /// The transport failed to send a descriptor or move data
    SpiTransferFailed,

    // Argument errors
    /// Address does not satisfy the command's alignment requirement
    InvalidAlignment,
    /// Register cannot be written through the register-write command
    RegisterNotWritable(RegisterKind),
    /// Opcode is not one of the accepted bare commands
    UnsupportedCommand(u8),
    /// Provided buffer is too small for the operation
    BufferTooSmall,

    // Device errors
    /// Identification returned a manufacturer other than Micron
    UnexpectedManufacturer {
        /// Manufacturer byte that was read back
        found: u8,
    },
    /// The flag status register does not report 4-byte addressing after entry
    AddressModeNotEntered,
    /// Device stayed busy for the whole wait budget
    Timeout,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpiTransferFailed => write!(f, "SPI transfer failed"),
            Self::InvalidAlignment => write!(f, "invalid alignment"),
            Self::RegisterNotWritable(kind) => write!(f, "{} is not writable", kind),
            Self::UnsupportedCommand(code) => {
                write!(f, "opcode 0x{:02X} is not a supported bare command", code)
            }
            Self::BufferTooSmall => write!(f, "buffer too small"),
            Self::UnexpectedManufacturer { found } => {
                write!(f, "unexpected manufacturer ID 0x{:02X}", found)
            }
            Self::AddressModeNotEntered => write!(f, "device did not enter 4-byte address mode"),
            Self::Timeout => write!(f, "operation timed out"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
