//! Byte order selection for 16-bit register reads

/// Byte order of a 16-bit register value
///
/// SMBus word reads arrive low byte first, so [`ByteOrder::LittleEndian`]
/// is the identity and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteOrder {
    /// Least significant byte first
    #[default]
    LittleEndian,
    /// Most significant byte first
    BigEndian,
}

impl ByteOrder {
    /// Reorder a word as returned by the SMBus word-read primitive
    pub const fn reorder(self, raw: u16) -> u16 {
        match self {
            Self::LittleEndian => raw,
            Self::BigEndian => raw.swap_bytes(),
        }
    }
}
