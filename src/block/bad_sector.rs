use super::{BlockDevice, BlockError, FaultRegion, MemoryBlockDevice};

/// In-memory device with one bad sector.
pub type BlockStore = BadSectorDevice<MemoryBlockDevice>;

/// Wraps a device and refuses every access whose footprint touches the
/// configured bad sector. Refused accesses never reach the inner device.
///
/// The inner device is only reachable again by consuming the wrapper:
///
/// ```compile_fail
/// use badsector::block::{BadSectorDevice, FaultRegion, MemoryBlockDevice};
///
/// let store = BadSectorDevice::new(MemoryBlockDevice::from_buffer(vec![0x5A; 1024]), FaultRegion::new(0));
/// let _ = store.get_ref();
/// ```
#[derive(Debug)]
pub struct BadSectorDevice<Device> {
    device: Device,
    fault: FaultRegion,
}

impl<Device: BlockDevice> BadSectorDevice<Device> {
    pub fn new(device: Device, fault: FaultRegion) -> Self {
        BadSectorDevice { device, fault }
    }

    pub fn fault_region(&self) -> FaultRegion {
        self.fault
    }

    #[cfg(test)]
    pub(crate) fn get_ref(&self) -> &Device {
        &self.device
    }

    pub fn into_inner(self) -> Device {
        self.device
    }

    fn check(&self, offset: u64, length: usize) -> Result<(), BlockError> {
        let length = length as u64;
        if self.fault.overlaps(offset, length) {
            log::debug!(
                "refusing {length} bytes at offset {offset}: bad sector {}",
                self.fault.bad_sector()
            );
            return Err(BlockError::Fault {
                offset,
                length,
                sector: self.fault.bad_sector(),
            });
        }
        Ok(())
    }
}

impl<Device: BlockDevice> BlockDevice for BadSectorDevice<Device> {
    fn size(&self) -> u64 {
        self.device.size()
    }

    fn read(&self, offset: u64, buffer: &mut [u8]) -> Result<(), BlockError> {
        self.check(offset, buffer.len())?;
        self.device.read(offset, buffer)
    }

    fn write(&mut self, offset: u64, buffer: &[u8]) -> Result<(), BlockError> {
        self.check(offset, buffer.len())?;
        self.device.write(offset, buffer)
    }
}
