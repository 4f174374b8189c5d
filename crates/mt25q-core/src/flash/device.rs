//! MT25Q device handle
//!
//! [`Mt25q`] owns a transport and the state negotiated with the device at
//! init time. Every public operation maps to one command sequence of
//! [`crate::protocol`].
//!
//! Uses `maybe_async` to support both sync and async modes.

use super::config::DeviceConfig;
use super::DeviceState;
use crate::chip::Identification;
use crate::error::{Error, Result};
use crate::protocol;
use crate::register::{FlagStatusRegister, Register, RegisterKind, StatusRegister};
use crate::spi::{AddressMode, BareCommand, EraseSize, SpiMode};
use crate::transport::SpiTransport;
use maybe_async::maybe_async;

/// Handle to an initialized MT25Q device
///
/// The handle is not synchronized; see the crate documentation.
///
/// # Example
///
/// ```ignore
/// use mt25q_core::flash::Mt25q;
/// use mt25q_core::spi::{EraseSize, SpiMode};
///
/// fn rewrite_first_page<T: SpiTransport>(transport: T, page: &[u8]) -> Result<T> {
///     let mut flash = Mt25q::init(transport, SpiMode::Dual)?;
///
///     flash.write_enable()?;
///     flash.erase(0, EraseSize::Subsector4K)?;
///     flash.wait_idle(1000)?;
///
///     flash.write_enable()?;
///     flash.page_program(0, page)?;
///     flash.wait_idle(10)?;
///
///     Ok(flash.release())
/// }
/// ```
pub struct Mt25q<T: SpiTransport> {
    transport: T,
    config: DeviceConfig,
    address_mode: AddressMode,
}

#[maybe_async]
impl<T: SpiTransport> Mt25q<T> {
    /// Reset and identify the device, using the default configuration
    ///
    /// See [`init_with_config`](Self::init_with_config).
    pub async fn init(transport: T, spi_mode: SpiMode) -> Result<Self> {
        Self::init_with_config(transport, DeviceConfig::new(spi_mode)).await
    }

    /// Reset and identify the device
    ///
    /// Runs the init sequence, aborting at the first failing step:
    /// 1. Reset Enable, Reset Memory
    /// 2. wait for idle
    /// 3. Read ID, the manufacturer must be Micron
    /// 4. if the density is above 128Mb: wait for idle, Enter 4-Byte Address
    ///    Mode, wait for idle, and check the flag status register reports
    ///    4-byte addressing
    ///
    /// Each wait uses `config.init_idle_retries` attempts and fails with
    /// [`Error::Timeout`] if the device stays busy. On failure the transport
    /// is dropped with the partially built handle.
    pub async fn init_with_config(transport: T, config: DeviceConfig) -> Result<Self> {
        let mut flash = Self {
            transport,
            config,
            address_mode: AddressMode::ThreeByte,
        };
        flash.negotiate().await?;
        Ok(flash)
    }

    async fn negotiate(&mut self) -> Result<()> {
        log::debug!("Resetting MT25Q ({} mode)", self.config.spi_mode);
        protocol::software_reset(&mut self.transport, self.address_mode).await?;
        self.expect_idle().await?;

        let id = self.get_id().await?;
        if !id.is_micron() {
            log::warn!(
                "Unexpected manufacturer ID 0x{:02X} (type 0x{:02X}, size 0x{:02X})",
                id.manufacturer,
                id.device_type,
                id.size_code
            );
            return Err(Error::UnexpectedManufacturer {
                found: id.manufacturer,
            });
        }
        match id.density() {
            Some(density) => log::debug!(
                "Found {} ({} Mbit, type 0x{:02X})",
                density.name,
                density.megabits,
                id.device_type
            ),
            None => log::debug!("Found MT25Q with unknown size code 0x{:02X}", id.size_code),
        }

        self.address_mode = AddressMode::from(id.requires_four_byte_addressing());
        if self.address_mode.is_four_byte() {
            log::debug!("Entering 4-byte address mode");
            self.expect_idle().await?;
            protocol::enter_4byte_mode(&mut self.transport, self.address_mode).await?;
            self.expect_idle().await?;

            let fsr = self.read_flag_status().await?;
            if !fsr.is_four_byte() {
                log::warn!("4-byte address mode not latched, FSR 0x{:02X}", fsr.bits());
                return Err(Error::AddressModeNotEntered);
            }
        }

        Ok(())
    }

    async fn expect_idle(&mut self) -> Result<()> {
        match self.wait_idle(self.config.init_idle_retries).await? {
            DeviceState::Idle => Ok(()),
            DeviceState::Busy => {
                log::warn!(
                    "Device still busy after {} attempts",
                    self.config.init_idle_retries
                );
                Err(Error::Timeout)
            }
        }
    }

    /// Wait until the device reports idle
    ///
    /// Makes up to `timeout_ms` attempts (at least one), sleeping the poll
    /// interval (1 ms by default) before each status read. Returns
    /// `Idle` as soon as the device is idle and `Busy` when the attempts run
    /// out. A failed status read is returned immediately.
    ///
    /// This sleeps; use [`check_busy`](Self::check_busy) where that is not
    /// allowed.
    pub async fn wait_idle(&mut self, timeout_ms: u32) -> Result<DeviceState> {
        protocol::wait_idle(
            &mut self.transport,
            self.address_mode,
            timeout_ms,
            self.config.timings.poll_interval_ms,
        )
        .await
    }

    /// Read the write-in-progress bit once, without sleeping
    pub async fn check_busy(&mut self) -> Result<DeviceState> {
        protocol::check_busy(&mut self.transport, self.address_mode).await
    }

    /// Read the identification record
    pub async fn get_id(&mut self) -> Result<Identification> {
        protocol::read_id(&mut self.transport, self.address_mode).await
    }

    /// Read a register
    pub async fn get_reg(&mut self, kind: RegisterKind) -> Result<Register> {
        protocol::read_register(&mut self.transport, kind, self.address_mode).await
    }

    /// Write a register
    ///
    /// Only the status register is writable. The flag status register fails
    /// with [`Error::RegisterNotWritable`]; clear it with
    /// [`clear_flag_status`](Self::clear_flag_status) instead.
    pub async fn set_reg(&mut self, value: Register) -> Result<()> {
        protocol::write_register(&mut self.transport, value, self.address_mode).await
    }

    /// Read the status register
    pub async fn read_status(&mut self) -> Result<StatusRegister> {
        let reg = self.get_reg(RegisterKind::Status).await?;
        Ok(StatusRegister::from_bits_retain(reg.raw()))
    }

    /// Read the flag status register
    ///
    /// After a failed program or erase, the error bits tell which one failed.
    pub async fn read_flag_status(&mut self) -> Result<FlagStatusRegister> {
        let reg = self.get_reg(RegisterKind::FlagStatus).await?;
        Ok(FlagStatusRegister::from_bits_retain(reg.raw()))
    }

    /// Fast read `buf.len()` bytes starting at `addr`
    ///
    /// `addr` must be 256-byte aligned, otherwise [`Error::InvalidAlignment`]
    /// is returned before anything is sent. An empty buffer is a no-op. On
    /// failure the buffer content is unspecified.
    pub async fn fast_read(&mut self, addr: u32, buf: &mut [u8]) -> Result<()> {
        protocol::fast_read(
            &mut self.transport,
            self.config.spi_mode,
            addr,
            buf,
            self.address_mode,
        )
        .await
    }

    /// Program one page starting at `addr`
    ///
    /// At most 256 bytes are programmed; anything beyond is silently dropped.
    /// Returns the number of bytes sent. An empty slice is a no-op.
    ///
    /// The caller must issue [`write_enable`](Self::write_enable) first and
    /// the target must be erased. The driver sleeps a fixed settling time
    /// afterwards but does not wait for completion.
    pub async fn page_program(&mut self, addr: u32, data: &[u8]) -> Result<usize> {
        protocol::page_program(
            &mut self.transport,
            self.config.spi_mode,
            addr,
            data,
            self.address_mode,
            self.config.timings.program_settle_ms,
        )
        .await
    }

    /// Erase the 4KB or 32KB subsector containing `addr`, or the whole device
    ///
    /// `addr` is ignored for [`EraseSize::Bulk`]. The caller must issue
    /// [`write_enable`](Self::write_enable) first. After the command the
    /// driver sleeps the nominal erase time (50 ms, 100 ms or 153 s by
    /// default) without polling; use [`wait_idle`](Self::wait_idle) to
    /// confirm completion and [`read_flag_status`](Self::read_flag_status)
    /// to diagnose a failure.
    pub async fn erase(&mut self, addr: u32, size: EraseSize) -> Result<()> {
        protocol::erase(
            &mut self.transport,
            size,
            addr,
            self.address_mode,
            self.config.timings.erase_delay_ms(size),
        )
        .await
    }

    /// Send one of the opcode-only configuration commands
    ///
    /// `code` must be one of [`BareCommand`]'s opcodes; anything else fails
    /// with [`Error::UnsupportedCommand`] before anything is sent.
    pub async fn send_bare_command(&mut self, code: u8) -> Result<()> {
        let command = BareCommand::try_from(code)?;
        self.send(command).await
    }

    async fn send(&mut self, command: BareCommand) -> Result<()> {
        protocol::send_bare(&mut self.transport, command.opcode(), self.address_mode).await
    }

    /// Set the write enable latch
    pub async fn write_enable(&mut self) -> Result<()> {
        self.send(BareCommand::WriteEnable).await
    }

    /// Clear the write enable latch
    pub async fn write_disable(&mut self) -> Result<()> {
        self.send(BareCommand::WriteDisable).await
    }

    /// Suspend the program or erase in progress
    pub async fn suspend(&mut self) -> Result<()> {
        self.send(BareCommand::Suspend).await
    }

    /// Resume a suspended program or erase
    pub async fn resume(&mut self) -> Result<()> {
        self.send(BareCommand::Resume).await
    }

    /// Clear the error bits of the flag status register
    pub async fn clear_flag_status(&mut self) -> Result<()> {
        self.send(BareCommand::ClearFlagStatus).await
    }
}

impl<T: SpiTransport> Mt25q<T> {
    /// Wire mode used for array reads and programs
    pub fn spi_mode(&self) -> SpiMode {
        self.config.spi_mode
    }

    /// Address mode negotiated at init
    pub fn address_mode(&self) -> AddressMode {
        self.address_mode
    }

    /// Configuration the handle was created with
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Get a reference to the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the handle and hand the transport back untouched
    pub fn release(self) -> T {
        self.transport
    }
}
