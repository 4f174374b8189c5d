//! SPI types and command structures
//!
//! This module provides the transaction descriptor, wire widths, address
//! modes and the MT25Q opcode table.

mod address;
mod command;
mod io_mode;
pub mod opcodes;

pub use address::{AddressMode, AddressWidth};
pub use command::{BareCommand, EraseSize, SpiCommand, REGISTER_LEN};
pub use io_mode::{SpiMode, WireWidth};
pub use opcodes::*;
