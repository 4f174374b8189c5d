//! Transport abstraction
//!
//! This module defines the collaborator trait that carries the driver's
//! transactions to the bus.

mod traits;

pub use traits::*;
