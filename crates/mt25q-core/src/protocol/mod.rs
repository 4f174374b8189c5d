//! Protocol implementations
//!
//! This module contains the MT25Q command sequences.

mod mt25q;

pub use mt25q::*;
