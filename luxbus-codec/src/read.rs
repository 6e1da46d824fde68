//! Register reads
//!
//! Byte and word reads with unsigned or two's-complement interpretation.
//! Word reads take a [`ByteOrder`]; the `_le`/`_be` helpers fix it.

use luxbus_hal::SmbusDevice;

use crate::order::ByteOrder;

/// Read an 8-bit value from the bus without selecting a register
pub fn read_raw_byte<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
) -> Result<u8, D::Error> {
    let value = device.read_byte(handle)?;

    #[cfg(feature = "defmt")]
    defmt::trace!("read raw byte {=u8:#x}", value);

    Ok(value)
}

/// Read an unsigned byte from `register`
pub fn read_u8<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
) -> Result<u8, D::Error> {
    let value = device.read_byte_data(handle, register)?;

    #[cfg(feature = "defmt")]
    defmt::trace!("read reg {=u8:#x} -> {=u8:#x}", register, value);

    Ok(value)
}

/// Read a signed byte from `register`
///
/// Values above 127 wrap to negative (200 reads as -56).
pub fn read_s8<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
) -> Result<i8, D::Error> {
    read_u8(device, handle, register).map(|raw| raw as i8)
}

/// Read an unsigned 16-bit value from `register` in the given byte order
///
/// The word primitive delivers the low byte first; [`ByteOrder::BigEndian`]
/// swaps the two bytes.
pub fn read_u16<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
    order: ByteOrder,
) -> Result<u16, D::Error> {
    let raw = device.read_word_data(handle, register)?;
    let value = order.reorder(raw);

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "read word reg {=u8:#x} raw {=u16:#x} ({}) -> {=u16:#x}",
        register,
        raw,
        order,
        value
    );

    Ok(value)
}

/// Read a signed 16-bit value from `register` in the given byte order
///
/// Values above 32767 wrap to negative (0x8000 reads as -32768).
pub fn read_s16<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
    order: ByteOrder,
) -> Result<i16, D::Error> {
    read_u16(device, handle, register, order).map(|raw| raw as i16)
}

/// Read an unsigned little-endian word from `register`
pub fn read_u16_le<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
) -> Result<u16, D::Error> {
    read_u16(device, handle, register, ByteOrder::LittleEndian)
}

/// Read an unsigned big-endian word from `register`
pub fn read_u16_be<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
) -> Result<u16, D::Error> {
    read_u16(device, handle, register, ByteOrder::BigEndian)
}

/// Read a signed little-endian word from `register`
pub fn read_s16_le<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
) -> Result<i16, D::Error> {
    read_s16(device, handle, register, ByteOrder::LittleEndian)
}

/// Read a signed big-endian word from `register`
pub fn read_s16_be<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
) -> Result<i16, D::Error> {
    read_s16(device, handle, register, ByteOrder::BigEndian)
}
