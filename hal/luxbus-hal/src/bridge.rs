//! SMBus primitives over a raw I2C master
//!
//! [`SmbusBridge`] turns any [`I2cBus`] into an [`SmbusDevice`]. The bus
//! handle is the 7-bit address of the target device; the bridge uses it
//! as given and keeps nothing between calls.
//!
//! # Transaction shapes
//!
//! | Primitive          | Bus traffic                                 |
//! |--------------------|---------------------------------------------|
//! | `read_byte`        | read 1                                      |
//! | `read_byte_data`   | write `[reg]`, repeated start, read 1       |
//! | `read_word_data`   | write `[reg]`, repeated start, read 2 (LSB) |
//! | `read_block_data`  | write `[reg]`, repeated start, read N       |
//! | `write_byte`       | write `[value]`                             |
//! | `write_byte_data`  | write `[reg, value]`                        |
//! | `write_word_data`  | write `[reg, lo, hi]`                       |
//! | `write_block_data` | write `[reg, data..]`                       |

use heapless::Vec;

use crate::i2c::I2cBus;
use crate::smbus::SmbusDevice;

/// Largest block an SMBus block transfer may carry
pub const SMBUS_BLOCK_MAX: usize = 32;

/// Register byte plus a full block
const BLOCK_FRAME_MAX: usize = SMBUS_BLOCK_MAX + 1;

/// Errors from bridged SMBus transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SmbusError<E> {
    /// The underlying I2C master failed
    Bus(E),
    /// Block transfer longer than [`SMBUS_BLOCK_MAX`]
    BlockTooLong {
        /// Requested length
        len: usize,
        /// Largest permitted length
        max: usize,
    },
}

impl<E: core::fmt::Debug> core::fmt::Display for SmbusError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "I2C bus error: {e:?}"),
            Self::BlockTooLong { len, max } => {
                write!(f, "block of {len} bytes exceeds SMBus limit of {max}")
            }
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for SmbusError<E> {}

/// Implements [`SmbusDevice`] on top of an [`I2cBus`]
#[derive(Debug)]
pub struct SmbusBridge<B> {
    bus: B,
}

impl<B: I2cBus> SmbusBridge<B> {
    /// Create a bridge over the given bus master
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Access the underlying bus master
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the underlying bus master
    pub fn release(self) -> B {
        self.bus
    }

    fn check_block_len(len: usize) -> Result<(), SmbusError<B::Error>> {
        if len > SMBUS_BLOCK_MAX {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "SMBus block of {} bytes rejected (max {})",
                len,
                SMBUS_BLOCK_MAX
            );
            return Err(SmbusError::BlockTooLong {
                len,
                max: SMBUS_BLOCK_MAX,
            });
        }
        Ok(())
    }

    fn block_frame(
        register: u8,
        data: &[u8],
    ) -> Result<Vec<u8, BLOCK_FRAME_MAX>, SmbusError<B::Error>> {
        Self::check_block_len(data.len())?;
        Ok(core::iter::once(register)
            .chain(data.iter().copied())
            .collect())
    }
}

impl<B: I2cBus> SmbusDevice for SmbusBridge<B> {
    type Handle = u8;
    type Error = SmbusError<B::Error>;

    fn read_byte(&mut self, handle: &u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.bus.read(*handle, &mut buf).map_err(SmbusError::Bus)?;
        Ok(buf[0])
    }

    fn read_byte_data(&mut self, handle: &u8, register: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.bus
            .write_read(*handle, &[register], &mut buf)
            .map_err(SmbusError::Bus)?;
        Ok(buf[0])
    }

    fn read_word_data(&mut self, handle: &u8, register: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.bus
            .write_read(*handle, &[register], &mut buf)
            .map_err(SmbusError::Bus)?;
        Ok(u16::from_le_bytes(buf))
    }

    fn read_block_data(
        &mut self,
        handle: &u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        Self::check_block_len(buf.len())?;
        // Zero-length reads never reach the bus
        if buf.is_empty() {
            return Ok(0);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "SMBus block read addr={=u8:#x} reg={=u8:#x} len={}",
            *handle,
            register,
            buf.len()
        );

        self.bus
            .write_read(*handle, &[register], buf)
            .map_err(SmbusError::Bus)?;
        Ok(buf.len())
    }

    fn write_byte(&mut self, handle: &u8, value: u8) -> Result<(), Self::Error> {
        self.bus.write(*handle, &[value]).map_err(SmbusError::Bus)
    }

    fn write_byte_data(&mut self, handle: &u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.bus
            .write(*handle, &[register, value])
            .map_err(SmbusError::Bus)
    }

    fn write_word_data(
        &mut self,
        handle: &u8,
        register: u8,
        value: u16,
    ) -> Result<(), Self::Error> {
        let [lo, hi] = value.to_le_bytes();
        self.bus
            .write(*handle, &[register, lo, hi])
            .map_err(SmbusError::Bus)
    }

    fn write_block_data(
        &mut self,
        handle: &u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let frame = Self::block_frame(register, data)?;

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "SMBus block write addr={=u8:#x} reg={=u8:#x} len={}",
            *handle,
            register,
            data.len()
        );

        self.bus.write(*handle, &frame).map_err(SmbusError::Bus)
    }
}
