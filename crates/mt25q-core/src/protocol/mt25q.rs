//! MT25Q protocol implementation
//!
//! This module implements the MT25Q command sequences on top of a
//! [`SpiTransport`]. The functions are stateless: the caller passes the
//! address mode currently latched in the device and the wire mode to use.
//!
//! Uses `maybe_async` to support both sync and async modes:
//! - With `is_sync` feature: blocking/synchronous
//! - Without `is_sync` feature: async
//!
//! Every transport failure aborts the sequence and is returned unchanged.
//! Argument checks happen before the first transport call.

use crate::chip::Identification;
use crate::error::{Error, Result};
use crate::flash::DeviceState;
use crate::register::{Register, RegisterKind};
use crate::spi::{opcodes, AddressMode, EraseSize, SpiCommand, SpiMode, REGISTER_LEN};
use crate::transport::SpiTransport;
use maybe_async::maybe_async;
use zerocopy::{FromZeros, IntoBytes};

/// Send one descriptor
#[maybe_async]
async fn issue<T: SpiTransport + ?Sized>(transport: &mut T, cmd: &SpiCommand) -> Result<()> {
    log::trace!(
        "MT25Q cmd 0x{:02X}: addr {} 0x{:08X}, data {} x{}, dummy {}",
        cmd.opcode,
        cmd.address_width().bytes(),
        cmd.address,
        cmd.data_len,
        cmd.data_lines.lines(),
        cmd.dummy_cycles
    );
    transport.send_command(cmd).await
}

/// Send an opcode-only command
#[maybe_async]
pub async fn send_bare<T: SpiTransport + ?Sized>(
    transport: &mut T,
    opcode: u8,
    address_mode: AddressMode,
) -> Result<()> {
    issue(transport, &SpiCommand::bare(opcode, address_mode)).await
}

/// Send the Reset Enable / Reset Memory pair
#[maybe_async]
pub async fn software_reset<T: SpiTransport + ?Sized>(
    transport: &mut T,
    address_mode: AddressMode,
) -> Result<()> {
    send_bare(transport, opcodes::RSTEN, address_mode).await?;
    send_bare(transport, opcodes::RST, address_mode).await
}

/// Enter 4-byte address mode
#[maybe_async]
pub async fn enter_4byte_mode<T: SpiTransport + ?Sized>(
    transport: &mut T,
    address_mode: AddressMode,
) -> Result<()> {
    send_bare(transport, opcodes::EN4B, address_mode).await
}

/// Read the identification record
#[maybe_async]
pub async fn read_id<T: SpiTransport + ?Sized>(
    transport: &mut T,
    address_mode: AddressMode,
) -> Result<Identification> {
    let cmd = SpiCommand::read_id(Identification::SIZE, address_mode);
    issue(transport, &cmd).await?;

    let mut id = Identification::new_zeroed();
    transport.receive(id.as_mut_bytes()).await?;
    Ok(id)
}

/// Read the status or flag status register
#[maybe_async]
pub async fn read_register<T: SpiTransport + ?Sized>(
    transport: &mut T,
    kind: RegisterKind,
    address_mode: AddressMode,
) -> Result<Register> {
    let cmd = SpiCommand::read_reg(kind.read_opcode(), address_mode);
    issue(transport, &cmd).await?;

    let mut buf = [0u8; REGISTER_LEN];
    transport.receive(&mut buf).await?;
    Ok(Register::from_raw(kind, buf[0]))
}

/// Write a register
///
/// Only the status register can be written; the flag status register is
/// rejected without touching the bus.
#[maybe_async]
pub async fn write_register<T: SpiTransport + ?Sized>(
    transport: &mut T,
    value: Register,
    address_mode: AddressMode,
) -> Result<()> {
    let kind = value.kind();
    let opcode = kind.write_opcode().ok_or(Error::RegisterNotWritable(kind))?;

    let cmd = SpiCommand::write_reg(opcode, address_mode);
    issue(transport, &cmd).await?;
    transport.transmit(&[value.raw()]).await
}

/// Check the write-in-progress bit once
///
/// Never sleeps.
#[maybe_async]
pub async fn check_busy<T: SpiTransport + ?Sized>(
    transport: &mut T,
    address_mode: AddressMode,
) -> Result<DeviceState> {
    let status = read_register(transport, RegisterKind::Status, address_mode).await?;
    let busy = status.as_status().is_some_and(|sr| sr.is_busy());
    Ok(if busy {
        DeviceState::Busy
    } else {
        DeviceState::Idle
    })
}

/// Wait for the write-in-progress bit to clear
///
/// Makes up to `max(attempts, 1)` attempts, each sleeping `poll_interval_ms`
/// before checking the status register. Returns `Idle` on the first idle
/// reading, `Busy` once the attempts are used up, and stops at the first
/// failed register read.
#[maybe_async]
pub async fn wait_idle<T: SpiTransport + ?Sized>(
    transport: &mut T,
    address_mode: AddressMode,
    attempts: u32,
    poll_interval_ms: u32,
) -> Result<DeviceState> {
    let attempts = core::cmp::max(attempts, 1);

    for _ in 0..attempts {
        transport.sleep_ms(poll_interval_ms).await;
        if check_busy(transport, address_mode).await? == DeviceState::Idle {
            return Ok(DeviceState::Idle);
        }
    }

    Ok(DeviceState::Busy)
}

/// Fast read in the given wire mode
///
/// The address must be aligned to 256 bytes. An empty buffer is a no-op.
#[maybe_async]
pub async fn fast_read<T: SpiTransport + ?Sized>(
    transport: &mut T,
    spi_mode: SpiMode,
    addr: u32,
    buf: &mut [u8],
    address_mode: AddressMode,
) -> Result<()> {
    if addr & 0xFF != 0 {
        return Err(Error::InvalidAlignment);
    }
    if buf.is_empty() {
        return Ok(());
    }

    let cmd = SpiCommand::fast_read(spi_mode, addr, buf.len(), address_mode);
    issue(transport, &cmd).await?;
    transport.receive(buf).await
}

/// Program up to one page in the given wire mode
///
/// Data beyond [`opcodes::PAGE_SIZE`] bytes is dropped. Sleeps `settle_ms`
/// after a successful transfer. Returns the number of bytes sent.
///
/// The write enable latch must be set and the target must be erased; neither
/// is checked here.
#[maybe_async]
pub async fn page_program<T: SpiTransport + ?Sized>(
    transport: &mut T,
    spi_mode: SpiMode,
    addr: u32,
    data: &[u8],
    address_mode: AddressMode,
    settle_ms: u32,
) -> Result<usize> {
    if data.is_empty() {
        return Ok(0);
    }

    let cmd = SpiCommand::page_program(spi_mode, addr, data.len(), address_mode);
    if cmd.data_len < data.len() {
        log::warn!(
            "Page program at 0x{:08X} truncated from {} to {} bytes",
            addr,
            data.len(),
            cmd.data_len
        );
    }

    issue(transport, &cmd).await?;
    transport.transmit(&data[..cmd.data_len]).await?;

    transport.sleep_ms(settle_ms).await;
    Ok(cmd.data_len)
}

/// Erase a subsector or the whole device
///
/// Sleeps `delay_ms` after the command is accepted. The erase may still be
/// running afterwards; poll with [`wait_idle`] to be certain.
#[maybe_async]
pub async fn erase<T: SpiTransport + ?Sized>(
    transport: &mut T,
    size: EraseSize,
    addr: u32,
    address_mode: AddressMode,
    delay_ms: u32,
) -> Result<()> {
    let cmd = SpiCommand::erase(size, addr, address_mode);
    issue(transport, &cmd).await?;

    transport.sleep_ms(delay_ms).await;
    Ok(())
}
