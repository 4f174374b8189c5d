//! SPI command descriptor
//!
//! A [`SpiCommand`] describes the framing of one bus transaction: opcode,
//! optional address, dummy clocks and the shape of the data phase that
//! follows. It carries no buffers; the data phase is moved separately
//! through [`SpiTransport::receive`](crate::transport::SpiTransport::receive)
//! or [`SpiTransport::transmit`](crate::transport::SpiTransport::transmit).
//!
//! The constructors below are the whole command encoder of the driver. They
//! are pure, so the exact opcode, wire width and dummy-cycle selection of
//! every operation can be checked without a device.

use super::opcodes;
use super::{AddressMode, AddressWidth, SpiMode, WireWidth};
use crate::error::Error;

/// Number of bytes moved by a status or flag status register access
pub const REGISTER_LEN: usize = 1;

/// A single SPI transaction descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiCommand {
    /// The opcode byte
    pub opcode: u8,

    /// Wire width of the opcode phase
    pub opcode_width: WireWidth,

    /// Address value, meaningless when `address_lines` is `WireWidth::None`
    pub address: u32,

    /// Wire width of the address phase (`None` = no address phase)
    pub address_lines: WireWidth,

    /// Number of bytes in the data phase
    pub data_len: usize,

    /// Wire width of the data phase (`None` = no data phase)
    pub data_lines: WireWidth,

    /// Number of dummy clock cycles after the address
    pub dummy_cycles: u8,

    /// Address mode latched in the device when the command was built
    pub address_mode: AddressMode,
}

impl SpiCommand {
    /// Create a bare command: opcode only, no address or data phase
    pub const fn bare(opcode: u8, address_mode: AddressMode) -> Self {
        Self {
            opcode,
            opcode_width: WireWidth::Single,
            address: 0,
            address_lines: WireWidth::None,
            data_len: 0,
            data_lines: WireWidth::None,
            dummy_cycles: 0,
            address_mode,
        }
    }

    /// Read ID: no address, single-wire data phase of `len` bytes
    pub const fn read_id(len: usize, address_mode: AddressMode) -> Self {
        Self::bare(opcodes::RDID, address_mode).with_data(len, WireWidth::Single)
    }

    /// Register read (RDSR / RDFSR) of [`REGISTER_LEN`] bytes
    pub const fn read_reg(opcode: u8, address_mode: AddressMode) -> Self {
        Self::bare(opcode, address_mode).with_data(REGISTER_LEN, WireWidth::Single)
    }

    /// Register write (WRSR) of [`REGISTER_LEN`] bytes
    pub const fn write_reg(opcode: u8, address_mode: AddressMode) -> Self {
        Self::bare(opcode, address_mode).with_data(REGISTER_LEN, WireWidth::Single)
    }

    /// Fast read in the given wire mode
    ///
    /// | mode     | opcode | data lines |
    /// |----------|--------|------------|
    /// | Standard | 0x0B   | 1          |
    /// | Dual     | 0x3B   | 2          |
    /// | Quad     | 0x6B   | 4          |
    ///
    /// The address is always single-wire and 8 dummy cycles follow it.
    pub const fn fast_read(mode: SpiMode, addr: u32, len: usize, address_mode: AddressMode) -> Self {
        let opcode = match mode {
            SpiMode::Quad => opcodes::QOFR,
            SpiMode::Dual => opcodes::DOFR,
            SpiMode::Standard => opcodes::FAST_READ,
        };
        Self::bare(opcode, address_mode)
            .with_address(addr)
            .with_data(len, mode.data_width())
            .with_dummy_cycles(opcodes::FAST_READ_DUMMY_CYCLES)
    }

    /// Page program in the given wire mode
    ///
    /// | mode     | opcode | data lines |
    /// |----------|--------|------------|
    /// | Standard | 0x02   | 1          |
    /// | Dual     | 0xA2   | 2          |
    /// | Quad     | 0x32   | 4          |
    ///
    /// `len` is clamped to [`opcodes::PAGE_SIZE`].
    pub fn page_program(mode: SpiMode, addr: u32, len: usize, address_mode: AddressMode) -> Self {
        let opcode = match mode {
            SpiMode::Quad => opcodes::QIFP,
            SpiMode::Dual => opcodes::DIFP,
            SpiMode::Standard => opcodes::PP,
        };
        Self::bare(opcode, address_mode)
            .with_address(addr)
            .with_data(core::cmp::min(len, opcodes::PAGE_SIZE), mode.data_width())
    }

    /// Erase of the given size; bulk erase has no address phase
    pub const fn erase(size: EraseSize, addr: u32, address_mode: AddressMode) -> Self {
        let cmd = Self::bare(size.opcode(), address_mode);
        if size.has_address() {
            cmd.with_address(addr)
        } else {
            cmd
        }
    }

    /// Add a single-wire address phase
    pub const fn with_address(mut self, addr: u32) -> Self {
        self.address = addr;
        self.address_lines = WireWidth::Single;
        self
    }

    /// Add a data phase
    pub const fn with_data(mut self, len: usize, lines: WireWidth) -> Self {
        self.data_len = len;
        self.data_lines = lines;
        self
    }

    /// Set the number of dummy cycles
    pub const fn with_dummy_cycles(mut self, cycles: u8) -> Self {
        self.dummy_cycles = cycles;
        self
    }

    /// Returns true if this command has an address phase
    pub const fn has_address(&self) -> bool {
        self.address_lines.is_present()
    }

    /// Returns true if this command has a data phase
    pub const fn has_data(&self) -> bool {
        self.data_lines.is_present() && self.data_len > 0
    }

    /// Number of address bytes put on the bus
    pub const fn address_width(&self) -> AddressWidth {
        if self.has_address() {
            self.address_mode.width()
        } else {
            AddressWidth::None
        }
    }

    /// Number of bytes the dummy cycles occupy on the address lines
    pub const fn dummy_bytes(&self) -> usize {
        let lines = if self.has_address() {
            self.address_lines.lines()
        } else {
            1
        };
        (self.dummy_cycles as usize * lines as usize) / 8
    }

    /// Length of the opcode + address + dummy header
    pub const fn header_len(&self) -> usize {
        1 + self.address_width().bytes() as usize + self.dummy_bytes()
    }

    /// Serialize the header for transports that shift raw bytes
    ///
    /// Dummy bytes are sent as 0xFF. Returns the number of bytes written.
    pub fn encode_header(&self, buf: &mut [u8]) -> usize {
        let len = self.header_len();
        buf[0] = self.opcode;
        let width = self.address_width();
        let addr_end = 1 + width.bytes() as usize;
        width.encode(self.address, &mut buf[1..addr_end]);
        for byte in &mut buf[addr_end..len] {
            *byte = 0xFF;
        }
        len
    }
}

/// Erase granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraseSize {
    /// 4KB subsector
    Subsector4K,
    /// 32KB subsector
    Subsector32K,
    /// Whole device
    Bulk,
}

impl EraseSize {
    /// Opcode issued for this erase size
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Subsector4K => opcodes::SSE_4K,
            Self::Subsector32K => opcodes::SSE_32K,
            Self::Bulk => opcodes::BE,
        }
    }

    /// Returns false for bulk erase, which takes no address
    pub const fn has_address(&self) -> bool {
        !matches!(self, Self::Bulk)
    }

    /// Number of bytes erased, `None` for bulk erase
    pub const fn bytes(&self) -> Option<u32> {
        match self {
            Self::Subsector4K => Some(4 * 1024),
            Self::Subsector32K => Some(32 * 1024),
            Self::Bulk => None,
        }
    }
}

/// Opcode-only configuration commands accepted by
/// [`Mt25q::send_bare_command`](crate::flash::Mt25q::send_bare_command)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BareCommand {
    /// Clear the error bits of the flag status register
    ClearFlagStatus = opcodes::CLFSR,
    /// Suspend a program or erase in progress
    Suspend = opcodes::SUSPEND,
    /// Resume a suspended program or erase
    Resume = opcodes::RESUME,
    /// Set the write enable latch
    WriteEnable = opcodes::WREN,
    /// Clear the write enable latch
    WriteDisable = opcodes::WRDI,
}

impl BareCommand {
    /// The opcode byte of this command
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for BareCommand {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            opcodes::CLFSR => Ok(Self::ClearFlagStatus),
            opcodes::SUSPEND => Ok(Self::Suspend),
            opcodes::RESUME => Ok(Self::Resume),
            opcodes::WREN => Ok(Self::WriteEnable),
            opcodes::WRDI => Ok(Self::WriteDisable),
            other => Err(Error::UnsupportedCommand(other)),
        }
    }
}
