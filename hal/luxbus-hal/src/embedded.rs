//! `embedded-hal` 1.0 adapter
//!
//! Wraps any blocking [`embedded_hal::i2c::I2c`] master so it can be used
//! wherever an [`I2cBus`] is expected.

use embedded_hal::i2c::I2c;

use crate::i2c::I2cBus;

/// [`I2cBus`] implementation over an `embedded-hal` I2C master
#[derive(Debug)]
pub struct EmbeddedHalBus<I> {
    i2c: I,
}

impl<I> EmbeddedHalBus<I> {
    /// Wrap an `embedded-hal` I2C master
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the underlying I2C master
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cBus for EmbeddedHalBus<I> {
    type Error = I::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(address, write_data, read_buf)
    }
}
