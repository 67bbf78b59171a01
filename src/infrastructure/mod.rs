//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod entries;
pub mod publish;
pub mod storage;

pub use config::Config;
pub use entries::EntriesFile;
pub use publish::{SitemapResponse, CONTENT_TYPE};
pub use storage::{Disk, LocalDisk, MemoryDisk, Storage};
