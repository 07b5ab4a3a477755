//! Command codes for the Kenwood XS system-control bus.
//!
//! The registry is a closed set of [`Command`]s, each carrying the byte that a
//! receiver on the bus decodes. Transmitting those bytes is left to the caller.

#![cfg_attr(not(test), no_std)]

mod command;
mod error;
mod line;

pub use command::{all_commands, lookup, Category, Command};
pub use error::{Error, Result};
pub use line::{LineBuffer, LineError, LINE_CAPACITY};
