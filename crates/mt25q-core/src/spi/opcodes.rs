//! MT25Q command opcodes
//!
//! Only the opcodes this driver issues are listed. Values follow the Micron
//! MT25Q datasheet command set table.

// ============================================================================
// Software reset
// ============================================================================

/// Reset Enable
pub const RSTEN: u8 = 0x66;
/// Reset Memory
pub const RST: u8 = 0x99;

// ============================================================================
// Identification
// ============================================================================

/// Read ID (manufacturer, device type, capacity, unique ID)
pub const RDID: u8 = 0x9E;

// ============================================================================
// Register operations
// ============================================================================

/// Read Status Register
pub const RDSR: u8 = 0x05;
/// Write Status Register
pub const WRSR: u8 = 0x01;
/// Read Flag Status Register
pub const RDFSR: u8 = 0x70;
/// Clear Flag Status Register
pub const CLFSR: u8 = 0x50;

// ============================================================================
// Write control
// ============================================================================

/// Write Enable - required before any program/erase/register write
pub const WREN: u8 = 0x06;
/// Write Disable - clears the write enable latch
pub const WRDI: u8 = 0x04;

// ============================================================================
// Read commands
// ============================================================================

/// Fast Read (1-1-1)
pub const FAST_READ: u8 = 0x0B;
/// Dual Output Fast Read (1-1-2)
pub const DOFR: u8 = 0x3B;
/// Quad Output Fast Read (1-1-4)
pub const QOFR: u8 = 0x6B;

// ============================================================================
// Program commands
// ============================================================================

/// Page Program (1-1-1)
pub const PP: u8 = 0x02;
/// Dual Input Fast Program (1-1-2)
pub const DIFP: u8 = 0xA2;
/// Quad Input Fast Program (1-1-4)
pub const QIFP: u8 = 0x32;

// ============================================================================
// Erase commands
// ============================================================================

/// 4KB Subsector Erase
pub const SSE_4K: u8 = 0x20;
/// 32KB Subsector Erase
pub const SSE_32K: u8 = 0x52;
/// Bulk Erase (entire die)
pub const BE: u8 = 0x60;

// ============================================================================
// Suspend/Resume
// ============================================================================

/// Program/Erase Suspend
pub const SUSPEND: u8 = 0x75;
/// Program/Erase Resume
pub const RESUME: u8 = 0x7A;

// ============================================================================
// 4-byte address mode control
// ============================================================================

/// Enter 4-Byte Address Mode
pub const EN4B: u8 = 0xB7;
/// Exit 4-Byte Address Mode
pub const EX4B: u8 = 0xE9;

// ============================================================================
// Device constants
// ============================================================================

/// JEDEC manufacturer ID of Micron
pub const MICRON_MANUFACTURER_ID: u8 = 0x20;

/// Program page size in bytes
pub const PAGE_SIZE: usize = 256;

/// Dummy clock cycles of every fast read variant
pub const FAST_READ_DUMMY_CYCLES: u8 = 8;
