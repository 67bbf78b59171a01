//! Named storage backends that sitemaps can be written to

use crate::error::{Result, SitemapError};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// A byte sink addressed by relative paths
pub trait Disk: Send + Sync {
    /// Store `contents` at `path`, replacing anything already there
    fn put(&self, path: &str, contents: &[u8]) -> Result<()>;
}

impl<D: Disk + ?Sized> Disk for Arc<D> {
    fn put(&self, path: &str, contents: &[u8]) -> Result<()> {
        (**self).put(path, contents)
    }
}

/// Disk backed by a directory on the local file system
#[derive(Debug, Clone)]
pub struct LocalDisk {
    root: PathBuf,
}

impl LocalDisk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalDisk { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Disk for LocalDisk {
    fn put(&self, path: &str, contents: &[u8]) -> Result<()> {
        let full_path = self.root.join(path.trim_start_matches('/'));

        // Create parent directories if needed
        if let Some(parent) = full_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        debug!("Writing {} bytes to {}", contents.len(), full_path.display());
        fs::write(&full_path, contents).map_err(SitemapError::Io)
    }
}

/// Disk that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemoryDisk {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryDisk {
    pub fn new() -> Self {
        MemoryDisk::default()
    }

    /// Contents stored at `path`, if any
    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.get(path).cloned()
    }
}

impl Disk for MemoryDisk {
    fn put(&self, path: &str, contents: &[u8]) -> Result<()> {
        // Map contents stay consistent even if another holder panicked
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.to_string(), contents.to_vec());
        Ok(())
    }
}

/// Registry of disks by name
#[derive(Default)]
pub struct Storage {
    disks: BTreeMap<String, Box<dyn Disk>>,
}

impl Storage {
    pub fn new() -> Self {
        Storage::default()
    }

    /// Register a disk, replacing any disk with the same name
    pub fn with_disk(mut self, name: impl Into<String>, disk: impl Disk + 'static) -> Self {
        self.disks.insert(name.into(), Box::new(disk));
        self
    }

    pub fn disk(&self, name: &str) -> Result<&dyn Disk> {
        self.disks
            .get(name)
            .map(|disk| disk.as_ref())
            .ok_or_else(|| SitemapError::DiskNotFound(name.to_string()))
    }

    /// Names of all registered disks, sorted
    pub fn names(&self) -> Vec<&str> {
        self.disks.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("disks", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_disk_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let disk = LocalDisk::new(temp.path());

        disk.put("public/maps/sitemap.xml", b"<urlset/>").unwrap();

        let written = fs::read_to_string(temp.path().join("public/maps/sitemap.xml")).unwrap();
        assert_eq!(written, "<urlset/>");
    }

    #[test]
    fn test_local_disk_strips_leading_slash() {
        let temp = TempDir::new().unwrap();
        let disk = LocalDisk::new(temp.path());

        disk.put("/sitemap.xml", b"x").unwrap();

        assert!(temp.path().join("sitemap.xml").exists());
    }

    #[test]
    fn test_local_disk_overwrites() {
        let temp = TempDir::new().unwrap();
        let disk = LocalDisk::new(temp.path());

        disk.put("sitemap.xml", b"first").unwrap();
        disk.put("sitemap.xml", b"second").unwrap();

        let written = fs::read_to_string(temp.path().join("sitemap.xml")).unwrap();
        assert_eq!(written, "second");
    }

    #[test]
    fn test_memory_disk_roundtrip() {
        let disk = MemoryDisk::new();
        assert!(disk.get("a.xml").is_none());

        disk.put("a.xml", b"abc").unwrap();
        assert_eq!(disk.get("a.xml"), Some(b"abc".to_vec()));
    }

    #[test]
    fn test_memory_disk_survives_poisoned_lock() {
        let disk = Arc::new(MemoryDisk::new());
        disk.put("a.xml", b"abc").unwrap();

        let poisoner = Arc::clone(&disk);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.files.lock().unwrap();
            panic!("writer crashed");
        })
        .join();
        assert!(disk.files.is_poisoned());

        assert_eq!(disk.get("a.xml"), Some(b"abc".to_vec()));
        disk.put("b.xml", b"def").unwrap();
        assert_eq!(disk.get("b.xml"), Some(b"def".to_vec()));
    }

    #[test]
    fn test_storage_resolves_by_name() {
        let storage = Storage::new()
            .with_disk("memory", MemoryDisk::new())
            .with_disk("local", LocalDisk::new("."));

        assert!(storage.disk("memory").is_ok());
        assert_eq!(storage.names(), vec!["local", "memory"]);

        match storage.disk("s3") {
            Err(SitemapError::DiskNotFound(name)) => assert_eq!(name, "s3"),
            _ => panic!("Expected DiskNotFound error"),
        }
    }
}
