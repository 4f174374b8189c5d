//! mt25q-core - Driver for MT25Q serial NOR flash
//!
//! This crate turns high-level flash operations (read, program, erase,
//! register access, identification and lifecycle commands) into normalized
//! command descriptors that are executed by an injected transport. It owns
//! no bus access itself and is `no_std` compatible.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`, RON config)
//! - `alloc` - Enable heap allocation
//! - `is_sync` - Compile every transport-facing operation as a blocking call
//!
//! # Example
//!
//! ```ignore
//! use mt25q_core::{flash::Mt25q, spi::SpiMode, transport::SpiTransport};
//!
//! fn dump_first_page<T: SpiTransport>(transport: T) -> mt25q_core::Result<[u8; 256]> {
//!     let mut flash = Mt25q::init(transport, SpiMode::Quad)?;
//!     let mut page = [0u8; 256];
//!     flash.fast_read(0, &mut page)?;
//!     Ok(page)
//! }
//! ```
//!
//! # Concurrency
//!
//! A [`flash::Mt25q`] handle is not synchronized. Operations must not be
//! issued concurrently on the same device; [`flash::Mt25q::check_busy`] is the
//! only operation that never sleeps and may be used where suspending is not
//! allowed.

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
// Allow async fn in traits - we use maybe-async for dual sync/async support
#![allow(async_fn_in_trait)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod chip;
pub mod error;
pub mod flash;
pub mod protocol;
pub mod register;
pub mod spi;
pub mod transport;

pub use error::{Error, Result};
