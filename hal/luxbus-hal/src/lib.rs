//! Luxbus Hardware Abstraction Layer
//!
//! This crate defines the bus primitives the register codec is written
//! against, plus bridges that implement those primitives on top of a raw
//! I2C master.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  luxbus-codec (typed register access)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  SmbusDevice (this crate - primitives)  │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  SmbusBridge  │       │ driver-native │
//! │  over I2cBus  │       │  SMBus impls  │
//! └───────────────┘       └───────────────┘
//!         │
//!         ▼
//! ┌───────────────┐
//! │ EmbeddedHalBus│
//! │ (e-h 1.0 I2c) │
//! └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`smbus::SmbusDevice`] - The eight register-oriented bus primitives
//! - [`i2c::I2cBus`] - Raw I2C master operations

#![no_std]
#![deny(unsafe_code)]

pub mod bridge;
pub mod embedded;
pub mod i2c;
pub mod smbus;

// Re-export key items at crate root for convenience
pub use bridge::{SmbusBridge, SmbusError, SMBUS_BLOCK_MAX};
pub use embedded::EmbeddedHalBus;
pub use i2c::I2cBus;
pub use smbus::SmbusDevice;
