//! Register-oriented bus primitives
//!
//! [`SmbusDevice`] is the capability contract the register codec is written
//! against. Anything that can perform these eight transactions can stand in
//! for the device: a kernel SMBus adapter, a daemon client, a
//! [`crate::SmbusBridge`] over a raw master, or a test double.

/// SMBus-style device primitives
///
/// Every operation takes the caller's bus handle. Implementations must not
/// retain it between calls; ownership of the handle stays with the caller.
///
/// Word transactions are little-endian on the wire (low byte first), as
/// SMBus defines them. Byte-order conversion is the codec's job, not the
/// primitive's.
pub trait SmbusDevice {
    /// Opaque reference to an open bus connection
    type Handle: ?Sized;

    /// Error type reported by the primitives
    type Error;

    /// Read a single byte with no register selection
    fn read_byte(&mut self, handle: &Self::Handle) -> Result<u8, Self::Error>;

    /// Read one byte from `register`
    fn read_byte_data(&mut self, handle: &Self::Handle, register: u8) -> Result<u8, Self::Error>;

    /// Read a 16-bit word from `register`, low byte first
    fn read_word_data(&mut self, handle: &Self::Handle, register: u8)
        -> Result<u16, Self::Error>;

    /// Read up to `buf.len()` bytes starting at `register`
    ///
    /// Returns the number of bytes the transfer actually produced.
    fn read_block_data(
        &mut self,
        handle: &Self::Handle,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error>;

    /// Write a single byte with no register selection
    fn write_byte(&mut self, handle: &Self::Handle, value: u8) -> Result<(), Self::Error>;

    /// Write one byte to `register`
    fn write_byte_data(
        &mut self,
        handle: &Self::Handle,
        register: u8,
        value: u8,
    ) -> Result<(), Self::Error>;

    /// Write a 16-bit word to `register`, low byte first
    fn write_word_data(
        &mut self,
        handle: &Self::Handle,
        register: u8,
        value: u16,
    ) -> Result<(), Self::Error>;

    /// Write `data` starting at `register`
    fn write_block_data(
        &mut self,
        handle: &Self::Handle,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error>;
}

impl<T: SmbusDevice + ?Sized> SmbusDevice for &mut T {
    type Handle = T::Handle;
    type Error = T::Error;

    fn read_byte(&mut self, handle: &Self::Handle) -> Result<u8, Self::Error> {
        (**self).read_byte(handle)
    }

    fn read_byte_data(&mut self, handle: &Self::Handle, register: u8) -> Result<u8, Self::Error> {
        (**self).read_byte_data(handle, register)
    }

    fn read_word_data(
        &mut self,
        handle: &Self::Handle,
        register: u8,
    ) -> Result<u16, Self::Error> {
        (**self).read_word_data(handle, register)
    }

    fn read_block_data(
        &mut self,
        handle: &Self::Handle,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        (**self).read_block_data(handle, register, buf)
    }

    fn write_byte(&mut self, handle: &Self::Handle, value: u8) -> Result<(), Self::Error> {
        (**self).write_byte(handle, value)
    }

    fn write_byte_data(
        &mut self,
        handle: &Self::Handle,
        register: u8,
        value: u8,
    ) -> Result<(), Self::Error> {
        (**self).write_byte_data(handle, register, value)
    }

    fn write_word_data(
        &mut self,
        handle: &Self::Handle,
        register: u8,
        value: u16,
    ) -> Result<(), Self::Error> {
        (**self).write_word_data(handle, register, value)
    }

    fn write_block_data(
        &mut self,
        handle: &Self::Handle,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        (**self).write_block_data(handle, register, data)
    }
}
