#[cfg(feature = "json")]
pub mod json;

use crate::{
    block::{BadSectorDevice, BlockStore, FaultRegion, MemoryBlockDevice, SectorIndex, memory::MemoryBlockDeviceError},
    parse::{IntegerParseError, SizeParseError, parse_size, parse_strict_u64},
};

/// 32 MiB.
pub const DEFAULT_SIZE: u64 = 32 * 1024 * 1024;
pub const DEFAULT_BAD_SECTOR: SectorIndex = 1024;

pub const SIZE_KEY: &str = "size";
pub const BAD_SECTOR_KEY: &str = "badsector";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Unrecognized parameter: {0}")]
    UnrecognizedParameter(String),

    #[error("Invalid size string {value:?}: {source}")]
    InvalidSize {
        value: String,
        #[source]
        source: SizeParseError,
    },

    #[error("Invalid integer string {value:?}: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: IntegerParseError,
    },

    #[error(transparent)]
    AllocationFailure(#[from] MemoryBlockDeviceError),

    #[cfg(feature = "json")]
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolved device parameters. Serializes with the same keys the parameter
/// list uses, so the output can be fed back as a parameter file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreConfig {
    pub size: u64,
    #[cfg_attr(feature = "serde", serde(rename = "badsector"))]
    pub bad_sector: SectorIndex,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            size: DEFAULT_SIZE,
            bad_sector: DEFAULT_BAD_SECTOR,
        }
    }
}

impl StoreConfig {
    pub fn build(self) -> Result<BlockStore, ConfigError> {
        let device = MemoryBlockDevice::allocate(self.size)
            .inspect_err(|err| log::error!("{err}"))?;
        log::info!("block store ready: {} bytes, bad sector {}", self.size, self.bad_sector);
        Ok(BadSectorDevice::new(device, FaultRegion::new(self.bad_sector)))
    }
}

/// Collects `key=value` parameters until [`StoreBuilder::finish`] turns them
/// into a [`BlockStore`]. Every step consumes the builder, so a rejected
/// parameter leaves nothing to finish.
#[derive(Clone, Debug, Default)]
pub struct StoreBuilder {
    config: StoreConfig,
}

impl StoreBuilder {
    pub fn new() -> Self {
        StoreBuilder::default()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn set(mut self, key: &str, value: &str) -> Result<Self, ConfigError> {
        match key {
            SIZE_KEY => {
                self.config.size = parse_size(value).map_err(|source| {
                    log::warn!("rejected {key}={value:?}: {source}");
                    ConfigError::InvalidSize { value: value.to_owned(), source }
                })?;
            }
            BAD_SECTOR_KEY => {
                self.config.bad_sector = parse_strict_u64(value).map_err(|source| {
                    log::warn!("rejected {key}={value:?}: {source}");
                    ConfigError::InvalidInteger { value: value.to_owned(), source }
                })?;
            }
            _ => {
                log::warn!("unrecognized parameter {key:?}");
                return Err(ConfigError::UnrecognizedParameter(key.to_owned()));
            }
        }
        log::debug!("{key}={value}");
        Ok(self)
    }

    /// Applies `pairs` in order, stopping at the first error.
    pub fn configure<I, K, V>(self, pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .try_fold(self, |builder, (key, value)| builder.set(key.as_ref(), value.as_ref()))
    }

    pub fn finish(self) -> Result<BlockStore, ConfigError> {
        self.config.build()
    }
}
