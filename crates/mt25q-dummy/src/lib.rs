//! mt25q-dummy - In-memory MT25Q emulator for testing
//!
//! This crate provides a transport that emulates an MT25Q device in memory.
//! It answers the command set of the driver, records every transport call
//! and can be told to fail at chosen points, so the driver can be exercised
//! without hardware.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use mt25q_core::error::{Error, Result};
use mt25q_core::register::{FlagStatusRegister, StatusRegister};
use mt25q_core::spi::{opcodes, AddressMode, EraseSize, SpiCommand};
use mt25q_core::transport::SpiTransport;

/// Configuration for the dummy flash
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// JEDEC manufacturer ID
    pub manufacturer_id: u8,
    /// Memory type byte
    pub device_type: u8,
    /// Capacity code reported by Read ID
    pub size_code: u8,
    /// Remaining 17 bytes of the Read ID response
    pub unique_id: [u8; 17],
    /// Size of the emulated array in bytes, a non-zero power of two;
    /// addresses wrap around it
    pub size: usize,
    /// Status reads reporting write-in-progress after each program or erase
    pub busy_polls: u32,
    /// Status reads reporting write-in-progress after a software reset
    pub busy_after_reset: u32,
    /// Status reads reporting write-in-progress after the given opcode is sent
    pub busy_after_opcode: Option<(u8, u32)>,
    /// Ignore Enter 4-Byte Address Mode
    pub refuse_four_byte: bool,
    /// Fail the command send with this index (0 = first)
    pub fail_command_at: Option<usize>,
    /// Fail every data receive
    pub fail_receive: bool,
    /// Fail the data receive of commands with this opcode
    pub fail_receive_opcode: Option<u8>,
    /// Fail every data transmit
    pub fail_transmit: bool,
}

impl Default for DummyConfig {
    fn default() -> Self {
        let mut unique_id = [0u8; 17];
        unique_id[0] = 0x10; // remaining ID length
        unique_id[1] = 0x40;
        Self {
            manufacturer_id: opcodes::MICRON_MANUFACTURER_ID,
            device_type: 0xBA, // 3 V
            size_code: 0x18,   // MT25Q128
            unique_id,
            size: 16 * 1024 * 1024,
            busy_polls: 0,
            busy_after_reset: 0,
            busy_after_opcode: None,
            refuse_four_byte: false,
            fail_command_at: None,
            fail_receive: false,
            fail_receive_opcode: None,
            fail_transmit: false,
        }
    }
}

impl DummyConfig {
    /// Report another capacity code, keeping an array of `size` bytes
    pub fn with_size_code(mut self, size_code: u8, size: usize) -> Self {
        self.size_code = size_code;
        self.size = size;
        self
    }
}

/// One call made on the transport
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// `send_command`
    Command(SpiCommand),
    /// `receive` of the given number of bytes
    Receive(usize),
    /// `transmit` of the given bytes
    Transmit(Vec<u8>),
    /// `sleep_ms`
    Sleep(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Program,
    Erase,
}

/// Dummy MT25Q device
///
/// Emulates the command set used by the driver:
/// - program clears bits only, erase sets bytes to 0xFF
/// - program, erase and status writes need the write enable latch; a program
///   or erase without it is dropped and latches the matching error bit in the
///   flag status register
/// - Reset Memory only acts right after Reset Enable
/// - in 3-byte address mode only the low 24 address bits are used
#[cfg(feature = "alloc")]
pub struct DummyFlash {
    config: DummyConfig,
    data: Vec<u8>,
    status: StatusRegister,
    flag_status: FlagStatusRegister,
    address_mode: AddressMode,
    reset_armed: bool,
    active: Option<Operation>,
    busy_remaining: u32,
    pending: Option<SpiCommand>,
    transactions: Vec<Transaction>,
    commands_sent: usize,
    total_sleep_ms: u64,
}

#[cfg(feature = "alloc")]
impl DummyFlash {
    /// Create a new dummy flash with the given configuration
    ///
    /// # Panics
    ///
    /// Panics if `config.size` is not a non-zero power of two.
    pub fn new(config: DummyConfig) -> Self {
        assert!(
            config.size.is_power_of_two(),
            "dummy flash size must be a non-zero power of two, got {}",
            config.size
        );
        let data = vec![0xFF; config.size];
        Self {
            config,
            data,
            status: StatusRegister::empty(),
            flag_status: FlagStatusRegister::READY,
            address_mode: AddressMode::ThreeByte,
            reset_armed: false,
            active: None,
            busy_remaining: 0,
            pending: None,
            transactions: Vec::new(),
            commands_sent: 0,
            total_sleep_ms: 0,
        }
    }

    /// Create a new dummy flash with default configuration (MT25Q128, 3 V)
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Create a dummy flash with pre-filled data
    pub fn with_data(config: DummyConfig, initial_data: &[u8]) -> Self {
        let mut flash = Self::new(config);
        let len = core::cmp::min(initial_data.len(), flash.data.len());
        flash.data[..len].copy_from_slice(&initial_data[..len]);
        flash
    }

    /// Get a reference to the flash data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the flash data
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the configuration
    pub fn config(&self) -> &DummyConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration, e.g. to arm a fault
    pub fn config_mut(&mut self) -> &mut DummyConfig {
        &mut self.config
    }

    /// Every transport call made so far
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Opcodes of the commands sent so far, in order
    pub fn opcodes(&self) -> Vec<u8> {
        self.transactions
            .iter()
            .filter_map(|t| match t {
                Transaction::Command(cmd) => Some(cmd.opcode),
                _ => None,
            })
            .collect()
    }

    /// Forget the recorded transactions and sleep time
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
        self.total_sleep_ms = 0;
    }

    /// Sum of all sleeps requested
    pub fn total_sleep_ms(&self) -> u64 {
        self.total_sleep_ms
    }

    /// Current status register, without consuming a busy poll
    pub fn status(&self) -> StatusRegister {
        let mut status = self.status;
        status.set(StatusRegister::WIP, self.is_busy());
        status
    }

    /// Current flag status register
    pub fn flag_status(&self) -> FlagStatusRegister {
        let mut fsr = self.flag_status;
        fsr.set(FlagStatusRegister::READY, !self.is_busy());
        fsr.set(
            FlagStatusRegister::ADDR_4BYTE,
            self.address_mode.is_four_byte(),
        );
        fsr
    }

    /// Address mode currently latched
    pub fn address_mode(&self) -> AddressMode {
        self.address_mode
    }

    /// Returns true if the write enable latch is set
    pub fn write_enabled(&self) -> bool {
        self.status.contains(StatusRegister::WEL)
    }

    /// Make the next `polls` status reads report write-in-progress
    pub fn set_busy(&mut self, polls: u32) {
        self.busy_remaining = polls;
    }

    fn is_busy(&self) -> bool {
        self.busy_remaining > 0 && !self.flag_status.is_suspended()
    }

    fn offset(&self, addr: u32) -> usize {
        self.address_mode.width().truncate(addr) as usize % self.data.len()
    }

    fn start(&mut self, op: Operation) {
        self.status.remove(StatusRegister::WEL);
        if self.config.busy_polls > 0 {
            self.active = Some(op);
            self.busy_remaining = self.config.busy_polls;
        }
    }

    fn reset(&mut self) {
        log::debug!("Dummy MT25Q reset");
        self.status.remove(StatusRegister::WEL);
        self.flag_status = FlagStatusRegister::READY;
        self.address_mode = AddressMode::ThreeByte;
        self.active = None;
        self.busy_remaining = self.config.busy_after_reset;
    }

    fn handle_erase(&mut self, cmd: &SpiCommand, size: EraseSize) {
        if !self.write_enabled() {
            log::debug!("Dummy MT25Q erase 0x{:02X} without WEL", cmd.opcode);
            self.flag_status.insert(FlagStatusRegister::ERASE_ERROR);
            return;
        }

        match size.bytes() {
            Some(bytes) => {
                let bytes = core::cmp::min(bytes as usize, self.data.len());
                let start = self.offset(cmd.address) & !(bytes - 1);
                let end = core::cmp::min(start + bytes, self.data.len());
                self.data[start..end].fill(0xFF);
            }
            None => self.data.fill(0xFF),
        }
        self.start(Operation::Erase);
    }

    fn handle_suspend(&mut self) {
        match self.active {
            Some(Operation::Program) if self.busy_remaining > 0 => {
                self.flag_status.insert(FlagStatusRegister::PROGRAM_SUSPENDED)
            }
            Some(Operation::Erase) if self.busy_remaining > 0 => {
                self.flag_status.insert(FlagStatusRegister::ERASE_SUSPENDED)
            }
            _ => {}
        }
    }

    fn handle_read(&mut self, cmd: &SpiCommand, buf: &mut [u8]) {
        let start = self.offset(cmd.address);
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.data[(start + i) % self.data.len()];
        }
    }

    fn handle_page_program(&mut self, cmd: &SpiCommand, data: &[u8]) {
        if !self.write_enabled() {
            log::debug!("Dummy MT25Q program 0x{:02X} without WEL", cmd.opcode);
            self.flag_status.insert(FlagStatusRegister::PROGRAM_ERROR);
            return;
        }

        // Programming wraps within the page
        let offset = self.offset(cmd.address);
        let page = offset & !(opcodes::PAGE_SIZE - 1);
        for (i, &byte) in data.iter().enumerate() {
            let index = (page + (offset + i) % opcodes::PAGE_SIZE) % self.data.len();
            // Flash programming: can only change 1 -> 0
            self.data[index] &= byte;
        }
        self.start(Operation::Program);
    }

    fn identification(&self) -> [u8; 20] {
        let mut id = [0u8; 20];
        id[0] = self.config.manufacturer_id;
        id[1] = self.config.device_type;
        id[2] = self.config.size_code;
        id[3..].copy_from_slice(&self.config.unique_id);
        id
    }

    fn take_pending(&mut self, len: usize) -> Result<SpiCommand> {
        match self.pending.take() {
            Some(cmd) if cmd.has_data() && cmd.data_len == len => Ok(cmd),
            Some(cmd) => {
                log::warn!(
                    "Dummy MT25Q: data phase of {} bytes for 0x{:02X} announcing {}",
                    len,
                    cmd.opcode,
                    cmd.data_len
                );
                Err(Error::SpiTransferFailed)
            }
            None => {
                log::warn!("Dummy MT25Q: data phase without a command");
                Err(Error::SpiTransferFailed)
            }
        }
    }
}

#[cfg(feature = "alloc")]
impl SpiTransport for DummyFlash {
    fn send_command(&mut self, cmd: &SpiCommand) -> Result<()> {
        self.transactions.push(Transaction::Command(*cmd));
        let index = self.commands_sent;
        self.commands_sent += 1;
        if self.config.fail_command_at == Some(index) {
            return Err(Error::SpiTransferFailed);
        }

        let reset_armed = core::mem::replace(&mut self.reset_armed, false);
        self.pending = None;

        match cmd.opcode {
            // Commands with a data phase complete in receive/transmit
            opcodes::RDID
            | opcodes::RDSR
            | opcodes::RDFSR
            | opcodes::WRSR
            | opcodes::FAST_READ
            | opcodes::DOFR
            | opcodes::QOFR
            | opcodes::PP
            | opcodes::DIFP
            | opcodes::QIFP => {
                self.pending = Some(*cmd);
            }

            // Write enable/disable
            opcodes::WREN => self.status.insert(StatusRegister::WEL),
            opcodes::WRDI => self.status.remove(StatusRegister::WEL),

            // Erase commands
            opcodes::SSE_4K => self.handle_erase(cmd, EraseSize::Subsector4K),
            opcodes::SSE_32K => self.handle_erase(cmd, EraseSize::Subsector32K),
            opcodes::BE => self.handle_erase(cmd, EraseSize::Bulk),

            // 4-byte address mode
            opcodes::EN4B => {
                if !self.config.refuse_four_byte {
                    self.address_mode = AddressMode::FourByte;
                }
            }
            opcodes::EX4B => self.address_mode = AddressMode::ThreeByte,

            // Flag status, suspend/resume
            opcodes::CLFSR => self.flag_status.remove(FlagStatusRegister::ERRORS),
            opcodes::SUSPEND => self.handle_suspend(),
            opcodes::RESUME => self.flag_status.remove(
                FlagStatusRegister::PROGRAM_SUSPENDED | FlagStatusRegister::ERASE_SUSPENDED,
            ),

            // Software reset
            opcodes::RSTEN => self.reset_armed = true,
            opcodes::RST => {
                if reset_armed {
                    self.reset();
                }
            }

            // Unknown opcode
            other => return Err(Error::UnsupportedCommand(other)),
        }

        if let Some((opcode, polls)) = self.config.busy_after_opcode {
            if opcode == cmd.opcode {
                self.busy_remaining = polls;
            }
        }

        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<()> {
        self.transactions.push(Transaction::Receive(buf.len()));
        if self.config.fail_receive {
            return Err(Error::SpiTransferFailed);
        }

        let cmd = self.take_pending(buf.len())?;
        if self.config.fail_receive_opcode == Some(cmd.opcode) {
            return Err(Error::SpiTransferFailed);
        }
        match cmd.opcode {
            opcodes::RDID => {
                let id = self.identification();
                let len = core::cmp::min(buf.len(), id.len());
                buf[..len].copy_from_slice(&id[..len]);
            }
            opcodes::RDSR => {
                buf[0] = self.status().bits();
                if self.is_busy() {
                    self.busy_remaining -= 1;
                    if self.busy_remaining == 0 {
                        self.active = None;
                    }
                }
            }
            opcodes::RDFSR => buf[0] = self.flag_status().bits(),
            opcodes::FAST_READ | opcodes::DOFR | opcodes::QOFR => self.handle_read(&cmd, buf),
            _ => return Err(Error::SpiTransferFailed),
        }

        Ok(())
    }

    fn transmit(&mut self, data: &[u8]) -> Result<()> {
        self.transactions.push(Transaction::Transmit(data.to_vec()));
        if self.config.fail_transmit {
            return Err(Error::SpiTransferFailed);
        }

        let cmd = self.take_pending(data.len())?;
        match cmd.opcode {
            opcodes::WRSR => {
                if self.write_enabled() {
                    let volatile = StatusRegister::WIP | StatusRegister::WEL;
                    self.status = StatusRegister::from_bits_retain(data[0]).difference(volatile);
                }
            }
            opcodes::PP | opcodes::DIFP | opcodes::QIFP => self.handle_page_program(&cmd, data),
            _ => return Err(Error::SpiTransferFailed),
        }

        Ok(())
    }

    fn sleep_ms(&mut self, ms: u32) {
        // No delay needed for in-memory operations
        self.transactions.push(Transaction::Sleep(ms));
        self.total_sleep_ms += u64::from(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mt25q_core::protocol;
    use mt25q_core::register::{Register, RegisterKind};
    use mt25q_core::spi::SpiMode;

    const THREE: AddressMode = AddressMode::ThreeByte;

    #[test]
    fn test_read_id() {
        let mut flash = DummyFlash::new_default();
        let id = protocol::read_id(&mut flash, THREE).unwrap();
        assert_eq!(id.manufacturer, 0x20);
        assert_eq!(id.device_type, 0xBA);
        assert_eq!(id.size_code, 0x18);
        assert_eq!(id.unique_id[0], 0x10);
    }

    #[test]
    fn test_program_clears_bits_only() {
        let mut flash = DummyFlash::new_default();
        flash.data_mut()[0x100] = 0xF0;

        protocol::send_bare(&mut flash, opcodes::WREN, THREE).unwrap();
        protocol::page_program(&mut flash, SpiMode::Standard, 0x100, &[0x3C], THREE, 1).unwrap();

        assert_eq!(flash.data()[0x100], 0x30);
        assert!(!flash.write_enabled());
    }

    #[test]
    fn test_program_without_wel_sets_error() {
        let mut flash = DummyFlash::new_default();
        protocol::page_program(&mut flash, SpiMode::Quad, 0, &[0x00; 4], THREE, 1).unwrap();

        assert_eq!(&flash.data()[..4], &[0xFF; 4]);
        assert!(flash.flag_status().contains(FlagStatusRegister::PROGRAM_ERROR));

        protocol::send_bare(&mut flash, opcodes::CLFSR, THREE).unwrap();
        assert!(!flash.flag_status().has_error());
    }

    #[test]
    fn test_erase_subsector() {
        let mut flash = DummyFlash::with_data(DummyConfig::default(), &[0u8; 0x2000]);

        protocol::send_bare(&mut flash, opcodes::WREN, THREE).unwrap();
        protocol::erase(&mut flash, EraseSize::Subsector4K, 0x1234, THREE, 50).unwrap();

        assert!(flash.data()[..0x1000].iter().all(|&b| b == 0x00));
        assert!(flash.data()[0x1000..0x2000].iter().all(|&b| b == 0xFF));
        assert_eq!(flash.total_sleep_ms(), 50);
    }

    #[test]
    fn test_erase_without_wel_sets_error() {
        let mut flash = DummyFlash::with_data(DummyConfig::default(), &[0u8; 16]);
        protocol::erase(&mut flash, EraseSize::Bulk, 0, THREE, 0).unwrap();

        assert_eq!(&flash.data()[..16], &[0u8; 16]);
        assert!(flash.flag_status().contains(FlagStatusRegister::ERASE_ERROR));
    }

    #[test]
    fn test_reset_needs_enable() {
        let mut flash = DummyFlash::new_default();
        protocol::send_bare(&mut flash, opcodes::EN4B, THREE).unwrap();

        // RST alone is ignored
        protocol::send_bare(&mut flash, opcodes::RST, THREE).unwrap();
        assert!(flash.address_mode().is_four_byte());

        // RSTEN followed by another command disarms the reset
        protocol::send_bare(&mut flash, opcodes::RSTEN, THREE).unwrap();
        protocol::send_bare(&mut flash, opcodes::WRDI, THREE).unwrap();
        protocol::send_bare(&mut flash, opcodes::RST, THREE).unwrap();
        assert!(flash.address_mode().is_four_byte());

        protocol::software_reset(&mut flash, THREE).unwrap();
        assert!(!flash.address_mode().is_four_byte());
    }

    #[test]
    fn test_three_byte_mode_truncates_address() {
        let config = DummyConfig::default().with_size_code(0x20, 64 * 1024 * 1024);
        let mut flash = DummyFlash::new(config);
        flash.data_mut()[0x0100] = 0x5A;
        flash.data_mut()[0x0100_0100] = 0xA5;

        let mut buf = [0u8; 1];
        protocol::fast_read(&mut flash, SpiMode::Standard, 0x0100_0100, &mut buf, THREE).unwrap();
        assert_eq!(buf[0], 0x5A);

        protocol::enter_4byte_mode(&mut flash, THREE).unwrap();
        let four = AddressMode::FourByte;
        protocol::fast_read(&mut flash, SpiMode::Standard, 0x0100_0100, &mut buf, four).unwrap();
        assert_eq!(buf[0], 0xA5);
    }

    #[test]
    fn test_busy_countdown() {
        let config = DummyConfig {
            busy_polls: 2,
            ..Default::default()
        };
        let mut flash = DummyFlash::new(config);
        protocol::send_bare(&mut flash, opcodes::WREN, THREE).unwrap();
        protocol::page_program(&mut flash, SpiMode::Dual, 0, &[0x00], THREE, 1).unwrap();

        assert!(!flash.flag_status().is_ready());
        let busy = |flash: &mut DummyFlash| protocol::check_busy(flash, THREE).unwrap();
        assert!(!busy(&mut flash).is_idle());
        assert!(!busy(&mut flash).is_idle());
        assert!(busy(&mut flash).is_idle());
        assert!(flash.flag_status().is_ready());
    }

    #[test]
    fn test_suspend_resume() {
        let config = DummyConfig {
            busy_polls: 5,
            ..Default::default()
        };
        let mut flash = DummyFlash::new(config);
        protocol::send_bare(&mut flash, opcodes::WREN, THREE).unwrap();
        protocol::erase(&mut flash, EraseSize::Subsector32K, 0, THREE, 0).unwrap();

        protocol::send_bare(&mut flash, opcodes::SUSPEND, THREE).unwrap();
        assert!(flash.flag_status().contains(FlagStatusRegister::ERASE_SUSPENDED));
        assert!(protocol::check_busy(&mut flash, THREE).unwrap().is_idle());

        protocol::send_bare(&mut flash, opcodes::RESUME, THREE).unwrap();
        assert!(!flash.flag_status().is_suspended());
        assert!(!protocol::check_busy(&mut flash, THREE).unwrap().is_idle());
    }

    #[test]
    fn test_status_write_needs_wel() {
        let mut flash = DummyFlash::new_default();
        let value = Register::Status(StatusRegister::empty().with_block_protection(0b0101));

        protocol::write_register(&mut flash, value, THREE).unwrap();
        assert_eq!(flash.status().block_protection(), 0);

        protocol::send_bare(&mut flash, opcodes::WREN, THREE).unwrap();
        protocol::write_register(&mut flash, value, THREE).unwrap();
        assert_eq!(flash.status().block_protection(), 0b0101);
        assert!(!flash.write_enabled());

        let reg = protocol::read_register(&mut flash, RegisterKind::Status, THREE).unwrap();
        assert_eq!(reg.raw(), value.raw());
    }

    #[test]
    fn test_fault_injection() {
        let config = DummyConfig {
            fail_command_at: Some(1),
            ..Default::default()
        };
        let mut flash = DummyFlash::new(config);
        assert_eq!(
            protocol::software_reset(&mut flash, THREE),
            Err(Error::SpiTransferFailed)
        );
        assert_eq!(flash.opcodes(), vec![opcodes::RSTEN, opcodes::RST]);

        flash.config_mut().fail_receive = true;
        assert_eq!(
            protocol::read_id(&mut flash, THREE),
            Err(Error::SpiTransferFailed)
        );
    }

    #[test]
    fn test_data_phase_length_mismatch() {
        let mut flash = DummyFlash::new_default();
        let cmd = SpiCommand::read_id(3, THREE);
        flash.send_command(&cmd).unwrap();

        let mut buf = [0u8; 20];
        assert_eq!(flash.receive(&mut buf), Err(Error::SpiTransferFailed));
    }

    #[test]
    fn test_busy_after_reset() {
        let config = DummyConfig {
            busy_after_reset: 2,
            ..Default::default()
        };
        let mut flash = DummyFlash::new(config);
        protocol::software_reset(&mut flash, THREE).unwrap();

        assert!(!protocol::check_busy(&mut flash, THREE).unwrap().is_idle());
        assert!(!protocol::check_busy(&mut flash, THREE).unwrap().is_idle());
        assert!(protocol::check_busy(&mut flash, THREE).unwrap().is_idle());
    }

    #[test]
    fn test_busy_after_opcode() {
        let config = DummyConfig {
            busy_after_opcode: Some((opcodes::EN4B, 1)),
            ..Default::default()
        };
        let mut flash = DummyFlash::new(config);
        protocol::read_id(&mut flash, THREE).unwrap();
        assert!(protocol::check_busy(&mut flash, THREE).unwrap().is_idle());

        protocol::enter_4byte_mode(&mut flash, THREE).unwrap();
        assert!(!protocol::check_busy(&mut flash, THREE).unwrap().is_idle());
        assert!(protocol::check_busy(&mut flash, THREE).unwrap().is_idle());
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn test_size_must_be_power_of_two() {
        let config = DummyConfig {
            size: 3 * 1024,
            ..Default::default()
        };
        let _ = DummyFlash::new(config);
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn test_size_must_not_be_zero() {
        let config = DummyConfig {
            size: 0,
            ..Default::default()
        };
        let _ = DummyFlash::new(config);
    }

    #[test]
    fn test_unknown_opcode() {
        let mut flash = DummyFlash::new_default();
        assert_eq!(
            flash.send_command(&SpiCommand::bare(0xAA, THREE)),
            Err(Error::UnsupportedCommand(0xAA))
        );
    }
}
