//! Transport trait definitions
//!
//! These traits use `maybe_async` to support both sync and async modes.
//! - By default, traits are async (suitable for Embassy and other executors)
//! - With the `is_sync` feature, traits become synchronous

use crate::error::Result;
use crate::spi::SpiCommand;
use maybe_async::maybe_async;

/// Bus transport the driver issues its transactions through
///
/// A transaction is split in two steps: [`send_command`](Self::send_command)
/// frames the opcode, address and dummy phases as described by the
/// descriptor, then [`receive`](Self::receive) or [`transmit`](Self::transmit)
/// moves the data phase announced by `SpiCommand::data_len` and
/// `SpiCommand::data_lines`. Commands without a data phase are complete
/// after `send_command`.
///
/// Errors are opaque to the driver: whatever a method returns is handed
/// back to the caller unchanged and never retried.
///
/// ## Example: byte-shifting controller
///
/// ```ignore
/// #[maybe_async]
/// impl SpiTransport for MyController {
///     async fn send_command(&mut self, cmd: &SpiCommand) -> Result<()> {
///         let mut header = [0u8; 8];
///         let len = cmd.encode_header(&mut header);
///         self.select();
///         self.shift_out(&header[..len], 1).await?;
///         if !cmd.has_data() {
///             self.deselect();
///         }
///         self.data_lines = cmd.data_lines.lines();
///         Ok(())
///     }
///     // ...
/// }
/// ```
#[maybe_async(AFIT)]
pub trait SpiTransport {
    /// Send the command phase described by `cmd`
    async fn send_command(&mut self, cmd: &SpiCommand) -> Result<()>;

    /// Read exactly `buf.len()` bytes of the data phase of the last command
    async fn receive(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Write exactly `data.len()` bytes of the data phase of the last command
    async fn transmit(&mut self, data: &[u8]) -> Result<()>;

    /// Block for at least `ms` milliseconds
    async fn sleep_ms(&mut self, ms: u32);
}

// Lending a transport keeps it owned by the caller across `Mt25q::release`.
#[maybe_async(AFIT)]
impl<T: SpiTransport + ?Sized> SpiTransport for &mut T {
    async fn send_command(&mut self, cmd: &SpiCommand) -> Result<()> {
        (**self).send_command(cmd).await
    }

    async fn receive(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).receive(buf).await
    }

    async fn transmit(&mut self, data: &[u8]) -> Result<()> {
        (**self).transmit(data).await
    }

    async fn sleep_ms(&mut self, ms: u32) {
        (**self).sleep_ms(ms).await
    }
}

// Blanket impl for boxed transports to allow trait objects (sync mode only)
// In async mode, traits with async fn are not object-safe
#[cfg(all(feature = "alloc", feature = "is_sync"))]
impl SpiTransport for alloc::boxed::Box<dyn SpiTransport + Send> {
    fn send_command(&mut self, cmd: &SpiCommand) -> Result<()> {
        (**self).send_command(cmd)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).receive(buf)
    }

    fn transmit(&mut self, data: &[u8]) -> Result<()> {
        (**self).transmit(data)
    }

    fn sleep_ms(&mut self, ms: u32) {
        (**self).sleep_ms(ms)
    }
}
