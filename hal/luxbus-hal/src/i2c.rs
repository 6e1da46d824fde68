//! I2C bus abstractions
//!
//! The raw master trait that [`crate::SmbusBridge`] builds the register
//! primitives on.

/// Raw I2C master
///
/// Byte-level transfers to a 7-bit address. Nothing here knows about
/// registers; the SMBus shapes are layered on top by the bridge.
pub trait I2cBus {
    /// Error reported by the master
    type Error;

    /// Send `data` to `address` as one write transfer
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buf` from `address` with no preceding write
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Send `write_data`, then read into `read_buf` after a repeated start
    ///
    /// The bridge sends the register byte as `write_data`, so the device
    /// answers from that register without releasing the bus in between.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).write_read(address, write_data, read_buf)
    }
}
