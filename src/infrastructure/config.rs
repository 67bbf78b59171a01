//! Configuration management

use super::storage::{LocalDisk, Storage};
use crate::error::{Result, SitemapError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "sitemap.toml";

/// Environment variable pointing at a config file
pub const CONFIG_ENV: &str = "SITEMAP_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskConfig {
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where `build` writes when no destination is given
    pub output: PathBuf,
    pub disks: BTreeMap<String, DiskConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let mut disks = BTreeMap::new();
        disks.insert(
            "local".to_string(),
            DiskConfig {
                root: PathBuf::from("."),
            },
        );

        Config {
            output: PathBuf::from("sitemap.xml"),
            disks,
        }
    }
}

impl Config {
    /// Resolve the config to use
    ///
    /// An explicit path must exist. Otherwise `SITEMAP_CONFIG` is checked,
    /// then `sitemap.toml` in `dir`; when neither exists the defaults apply.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            return Self::load_from_path(Path::new(&env_path));
        }

        let local = dir.join(CONFIG_FILE);
        if local.is_file() {
            Self::load_from_path(&local)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SitemapError::ConfigNotFound(path.to_path_buf())
            } else {
                SitemapError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            SitemapError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to a TOML file
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        fs::write(path, contents)?;

        Ok(())
    }

    /// Build the disk registry, resolving relative roots against `base`
    pub fn storage(&self, base: &Path) -> Storage {
        self.disks
            .iter()
            .fold(Storage::new(), |storage, (name, disk)| {
                storage.with_disk(name.clone(), LocalDisk::new(base.join(&disk.root)))
            })
    }
}
