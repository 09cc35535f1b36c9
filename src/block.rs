pub mod fault;
pub mod memory;
pub mod bad_sector;

pub use bad_sector::{BadSectorDevice, BlockStore};
pub use fault::{FaultRegion, SectorIndex, SECTOR_SIZE};
pub use memory::MemoryBlockDevice;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("Access of {length} bytes at offset {offset} touches bad sector {sector}")]
    Fault {
        offset: u64,
        length: u64,
        sector: SectorIndex,
    },
    #[error("Out of bounds")]
    OutOfBounds,
}

impl From<BlockError> for std::io::Error {
    fn from(err: BlockError) -> Self {
        let kind = match err {
            BlockError::Fault { .. } => std::io::ErrorKind::Other,
            BlockError::OutOfBounds => std::io::ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, err)
    }
}

/// Capability a transport needs to serve a block device: its size plus
/// positional reads and writes.
pub trait BlockDevice {
    /// Logical size of the device in bytes.
    fn size(&self) -> u64;

    fn read(&self, offset: u64, buffer: &mut [u8]) -> Result<(), BlockError>;

    fn write(&mut self, offset: u64, buffer: &[u8]) -> Result<(), BlockError>;

    fn read_vec(&self, offset: u64, length: u32) -> Result<Vec<u8>, BlockError> {
        let mut buffer = vec![0u8; length as usize];
        self.read(offset, &mut buffer)?;
        Ok(buffer)
    }
}
