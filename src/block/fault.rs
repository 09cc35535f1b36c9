pub type SectorIndex = u64;

pub const SECTOR_SIZE: u64 = 512;

/// The single failing sector of a device.
///
/// An access fails as a whole when its footprint touches the bad sector. The
/// footprint runs from the sector holding `offset` up to and including the
/// sector holding `offset + length`, so an access ending exactly on the bad
/// sector's first byte is refused too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaultRegion {
    bad_sector: SectorIndex,
}

impl FaultRegion {
    pub const fn new(bad_sector: SectorIndex) -> Self {
        FaultRegion { bad_sector }
    }

    pub const fn bad_sector(&self) -> SectorIndex {
        self.bad_sector
    }

    pub const fn overlaps(&self, offset: u64, length: u64) -> bool {
        let first_sector = offset / SECTOR_SIZE;
        let last_sector = offset.saturating_add(length) / SECTOR_SIZE;
        first_sector <= self.bad_sector && self.bad_sector <= last_sector
    }
}
