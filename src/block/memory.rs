use std::{fmt, ops::Range};

use super::{BlockDevice, BlockError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryBlockDeviceError {
    #[error("Failed to allocate {size} bytes")]
    AllocationFailure { size: u64 },
}

/// Zero-initialized device backed by a heap buffer it owns exclusively.
pub struct MemoryBlockDevice {
    buffer: Box<[u8]>,
}

impl fmt::Debug for MemoryBlockDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBlockDevice")
            .field("size", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

impl MemoryBlockDevice {
    pub fn allocate(size: u64) -> Result<Self, MemoryBlockDeviceError> {
        let failure = MemoryBlockDeviceError::AllocationFailure { size };
        let len = usize::try_from(size).map_err(|_| failure.clone())?;
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| failure)?;
        buffer.resize(len, 0u8);
        Ok(MemoryBlockDevice {
            buffer: buffer.into_boxed_slice(),
        })
    }

    pub fn from_buffer(buffer: impl Into<Box<[u8]>>) -> Self {
        MemoryBlockDevice {
            buffer: buffer.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_buffer(self) -> Box<[u8]> {
        self.buffer
    }

    fn range(&self, offset: u64, length: usize) -> Result<Range<usize>, BlockError> {
        let start = usize::try_from(offset).map_err(|_| BlockError::OutOfBounds)?;
        let end = start.checked_add(length).ok_or(BlockError::OutOfBounds)?;
        if end > self.buffer.len() {
            return Err(BlockError::OutOfBounds);
        }
        Ok(start..end)
    }
}

impl BlockDevice for MemoryBlockDevice {
    fn size(&self) -> u64 {
        self.buffer.len() as u64
    }

    fn read(&self, offset: u64, buffer: &mut [u8]) -> Result<(), BlockError> {
        let range = self.range(offset, buffer.len())?;
        buffer.copy_from_slice(&self.buffer[range]);
        Ok(())
    }

    fn write(&mut self, offset: u64, buffer: &[u8]) -> Result<(), BlockError> {
        let range = self.range(offset, buffer.len())?;
        self.buffer[range].copy_from_slice(buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_block_device() {
        const SIZE: usize = 40;

        // prepare data
        let mut data = [0u8; SIZE];
        for (i, byte) in data.iter_mut().enumerate() {
            *byte = i as u8;
        }

        // read test
        let mut device = MemoryBlockDevice::from_buffer(data.to_vec());
        assert_eq!(device.size(), SIZE as u64);
        for offset in (0..SIZE).step_by(10) {
            let mut buffer = vec![0u8; 10];
            device.read(offset as u64, &mut buffer).unwrap();
            for j in 0..10 {
                assert_eq!(buffer[j], (offset + j) as u8);
            }
        }

        // write test
        for offset in (0..SIZE).step_by(10) {
            let buffer: Vec<u8> = (0..10).map(|j| 255 - (offset + j) as u8).collect();
            device.write(offset as u64, &buffer).unwrap();
        }
        let buffer = device.into_buffer();
        for i in 0..SIZE {
            assert_eq!(buffer[i], 255 - (i as u8));
        }

        // out of bounds test
        let mut device = MemoryBlockDevice::from_buffer(buffer);
        let mut buffer = vec![0u8; 11];
        assert!(matches!(device.read(30, &mut buffer), Err(BlockError::OutOfBounds)));
        assert!(matches!(device.write(30, &buffer), Err(BlockError::OutOfBounds)));
        assert!(matches!(device.read(u64::MAX, &mut buffer), Err(BlockError::OutOfBounds)));
        assert_eq!(device.as_slice()[30], 225);
    }

    #[test]
    fn test_allocate() {
        let device = MemoryBlockDevice::allocate(4096).unwrap();
        assert_eq!(device.size(), 4096);
        assert!(device.as_slice().iter().all(|&byte| byte == 0));

        let device = MemoryBlockDevice::allocate(0).unwrap();
        assert_eq!(device.size(), 0);
    }

    #[test]
    fn test_allocate_failure() {
        assert_eq!(
            MemoryBlockDevice::allocate(u64::MAX).unwrap_err(),
            MemoryBlockDeviceError::AllocationFailure { size: u64::MAX },
        );
    }
}
