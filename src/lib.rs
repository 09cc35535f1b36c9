//! An in-memory block device that works everywhere except one configured
//! sector, for exercising how clients cope with localized media faults.
//!
//! ```
//! use badsector::{block::BlockDevice, config::StoreBuilder};
//!
//! let mut store = StoreBuilder::new()
//!     .configure([("size", "1m"), ("badsector", "0")])?
//!     .finish()?;
//!
//! assert!(store.read_vec(0, 512).is_err());
//! store.write(512, &[1, 2, 3])?;
//! assert_eq!(store.read_vec(512, 3)?, vec![1, 2, 3]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod block;
pub mod config;
pub mod parse;
