//! Block transfers
//!
//! Bytes pass through untouched in both directions.

use heapless::Vec;
use luxbus_hal::SmbusDevice;

/// Write `data` starting at `register`
pub fn write_block<D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
    data: &[u8],
) -> Result<(), D::Error> {
    #[cfg(feature = "defmt")]
    defmt::trace!("write block reg {=u8:#x} len {}", register, data.len());

    device.write_block_data(handle, register, data)
}

/// Read `buf.len()` bytes starting at `register`
///
/// Returns the prefix of `buf` the device actually filled. A short
/// transfer yields a shorter slice; an empty `buf` yields an empty slice.
pub fn read_block<'b, D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
    buf: &'b mut [u8],
) -> Result<&'b [u8], D::Error> {
    let count = device.read_block_data(handle, register, buf)?;
    let count = count.min(buf.len());

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "read block reg {=u8:#x} requested {} got {}",
        register,
        buf.len(),
        count
    );

    Ok(&buf[..count])
}

/// Read `length` bytes starting at `register` into an owned buffer
///
/// `length` is clamped to the capacity `N`.
pub fn read_block_vec<const N: usize, D: SmbusDevice + ?Sized>(
    device: &mut D,
    handle: &D::Handle,
    register: u8,
    length: usize,
) -> Result<Vec<u8, N>, D::Error> {
    let mut buf = [0u8; N];
    let len = length.min(N);
    let data = read_block(device, handle, register, &mut buf[..len])?;
    Ok(data.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockDevice, MockError, HANDLE};
    use proptest::prelude::*;

    #[test]
    fn test_write_block_passes_bytes_unaltered() {
        let mut dev = MockDevice::default();
        write_block(&mut dev, &HANDLE, 0x90, &[0x00, 0xFF, 0x7F]).unwrap();
        assert_eq!(
            dev.calls,
            vec![Call::WriteBlockData(0x90, vec![0x00, 0xFF, 0x7F])]
        );
    }

    #[test]
    fn test_read_block_zero_length() {
        let mut dev = MockDevice::with_block(&[1, 2, 3]);
        let mut buf = [0u8; 0];
        let data = read_block(&mut dev, &HANDLE, 0x9B, &mut buf).unwrap();
        assert!(data.is_empty());
        assert_eq!(dev.calls, vec![Call::ReadBlockData(0x9B, 0)]);
    }

    #[test]
    fn test_read_block_short_transfer() {
        let mut dev = MockDevice::with_block(&[0xAA, 0xBB]);
        let mut buf = [0u8; 4];
        let data = read_block(&mut dev, &HANDLE, 0x9B, &mut buf).unwrap();
        assert_eq!(data, &[0xAA, 0xBB]);
    }

    #[test]
    fn test_read_block_vec_clamps_to_capacity() {
        let mut dev = MockDevice::with_block(&[1, 2, 3, 4, 5, 6]);
        let data: Vec<u8, 4> = read_block_vec(&mut dev, &HANDLE, 0x9B, 10).unwrap();
        assert_eq!(data.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(dev.calls, vec![Call::ReadBlockData(0x9B, 4)]);
    }

    #[test]
    fn test_block_errors_pass_through() {
        let mut dev = MockDevice::failing();
        let mut buf = [0u8; 2];
        assert_eq!(
            read_block(&mut dev, &HANDLE, 0x9B, &mut buf),
            Err(MockError::NotResponding)
        );
        assert_eq!(
            read_block_vec::<8, _>(&mut dev, &HANDLE, 0x9B, 2),
            Err(MockError::NotResponding)
        );
        assert_eq!(
            write_block(&mut dev, &HANDLE, 0x90, &[1]),
            Err(MockError::NotResponding)
        );
    }

    proptest! {
        #[test]
        fn prop_read_block_returns_device_bytes(
            block in proptest::collection::vec(any::<u8>(), 0..64),
            length in 0usize..64,
        ) {
            let mut dev = MockDevice::with_block(&block);
            let mut buf = vec![0u8; length];
            let data = read_block(&mut dev, &HANDLE, 0x9B, &mut buf).unwrap();

            let expected = &block[..length.min(block.len())];
            prop_assert_eq!(data, expected);
        }
    }
}
