//! I2C register codec
//!
//! Converts between raw SMBus transaction results and typed integers for
//! register-mapped sensors such as the TSL2561 light sensor:
//!
//! - Raw byte read/write with no register selection
//! - Register byte read/write, unsigned or signed
//! - Register word read/write, unsigned or signed, with selectable byte order
//! - Block read/write starting at a register
//!
//! Every function borrows a [`SmbusDevice`] and the caller's bus handle for
//! the duration of one call and keeps nothing afterwards. Errors are the
//! device's own error type, returned untouched.
//!
//! ```ignore
//! use luxbus_codec::{read_u16_le, write_u8};
//! use luxbus_hal::{EmbeddedHalBus, SmbusBridge};
//!
//! let mut dev = SmbusBridge::new(EmbeddedHalBus::new(i2c));
//! let addr = 0x39;
//! write_u8(&mut dev, &addr, 0x80, 0x03)?;        // power on
//! let ch0 = read_u16_le(&mut dev, &addr, 0xAC)?; // broadband channel
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod block;
pub mod order;
pub mod read;
pub mod write;

#[cfg(test)]
mod mock;

pub use block::{read_block, read_block_vec, write_block};
pub use order::ByteOrder;
pub use read::{
    read_raw_byte, read_s16, read_s16_be, read_s16_le, read_s8, read_u16, read_u16_be,
    read_u16_le, read_u8,
};
pub use write::{write_raw_byte, write_u16, write_u8};

pub use luxbus_hal::SmbusDevice;
