//! Register writes
//!
//! Values are typed `u8`/`u16`, so narrowing a wider integer at the call
//! site (`value as u8`) is the 8/16-bit mask.

use luxbus_hal::SmbusDevice;

/// Write an 8-bit value on the bus without selecting a register
pub fn write_raw_byte<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    value: u8,
) -> Result<(), D::Error> {
    #[cfg(feature = "defmt")]
    defmt::trace!("write raw byte {=u8:#x}", value);

    device.write_byte(handle, value)
}

/// Write an 8-bit value to `register`
pub fn write_u8<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
    value: u8,
) -> Result<(), D::Error> {
    #[cfg(feature = "defmt")]
    defmt::trace!("write reg {=u8:#x} <- {=u8:#x}", register, value);

    device.write_byte_data(handle, register, value)
}

/// Write a 16-bit value to `register`
///
/// Unlike [`crate::read_u16`] there is no byte-order parameter: the value
/// goes out in the word primitive's native order (low byte first). A
/// big-endian register must be written with `value.swap_bytes()` or through
/// [`crate::write_block`].
pub fn write_u16<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
    value: u16,
) -> Result<(), D::Error> {
    #[cfg(feature = "defmt")]
    defmt::trace!("write word reg {=u8:#x} <- {=u16:#x}", register, value);

    device.write_word_data(handle, register, value)
}
