//! Scripted [`SmbusDevice`] for codec tests

use luxbus_hal::SmbusDevice;

/// Handle type the mock expects; every call checks it arrived unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockHandle(pub u32);

pub const HANDLE: MockHandle = MockHandle(7);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    NotResponding,
}

/// A primitive call as seen by the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ReadByte,
    ReadByteData(u8),
    ReadWordData(u8),
    ReadBlockData(u8, usize),
    WriteByte(u8),
    WriteByteData(u8, u8),
    WriteWordData(u8, u16),
    WriteBlockData(u8, Vec<u8>),
}

#[derive(Debug, Default)]
pub struct MockDevice {
    /// Value returned by byte reads
    pub byte: u8,
    /// Value returned by word reads
    pub word: u16,
    /// Bytes available to block reads; shorter than the request means a
    /// short transfer
    pub block: Vec<u8>,
    pub fail: bool,
    pub calls: Vec<Call>,
}

impl MockDevice {
    pub fn with_byte(byte: u8) -> Self {
        Self {
            byte,
            ..Self::default()
        }
    }

    pub fn with_word(word: u16) -> Self {
        Self {
            word,
            ..Self::default()
        }
    }

    pub fn with_block(block: &[u8]) -> Self {
        Self {
            block: block.to_vec(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn record(&mut self, handle: &MockHandle, call: Call) -> Result<(), MockError> {
        assert_eq!(*handle, HANDLE, "handle must be forwarded unchanged");
        self.calls.push(call);
        if self.fail {
            return Err(MockError::NotResponding);
        }
        Ok(())
    }
}

impl SmbusDevice for MockDevice {
    type Handle = MockHandle;
    type Error = MockError;

    fn read_byte(&mut self, handle: &MockHandle) -> Result<u8, MockError> {
        self.record(handle, Call::ReadByte)?;
        Ok(self.byte)
    }

    fn read_byte_data(&mut self, handle: &MockHandle, register: u8) -> Result<u8, MockError> {
        self.record(handle, Call::ReadByteData(register))?;
        Ok(self.byte)
    }

    fn read_word_data(&mut self, handle: &MockHandle, register: u8) -> Result<u16, MockError> {
        self.record(handle, Call::ReadWordData(register))?;
        Ok(self.word)
    }

    fn read_block_data(
        &mut self,
        handle: &MockHandle,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, MockError> {
        self.record(handle, Call::ReadBlockData(register, buf.len()))?;
        let count = buf.len().min(self.block.len());
        buf[..count].copy_from_slice(&self.block[..count]);
        Ok(count)
    }

    fn write_byte(&mut self, handle: &MockHandle, value: u8) -> Result<(), MockError> {
        self.record(handle, Call::WriteByte(value))
    }

    fn write_byte_data(
        &mut self,
        handle: &MockHandle,
        register: u8,
        value: u8,
    ) -> Result<(), MockError> {
        self.record(handle, Call::WriteByteData(register, value))
    }

    fn write_word_data(
        &mut self,
        handle: &MockHandle,
        register: u8,
        value: u16,
    ) -> Result<(), MockError> {
        self.record(handle, Call::WriteWordData(register, value))
    }

    fn write_block_data(
        &mut self,
        handle: &MockHandle,
        register: u8,
        data: &[u8],
    ) -> Result<(), MockError> {
        self.record(handle, Call::WriteBlockData(register, data.to_vec()))
    }
}
