//! Error types for sitemap-builder

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sitemap-builder
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Duplicate url: {0}")]
    DuplicateUrl(String),

    #[error("Disk not configured: {0}")]
    DiskNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SitemapError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SitemapError::InvalidEntry(_) | SitemapError::TomlDeserialize(_) => 2,
            SitemapError::DiskNotFound(_) | SitemapError::ConfigNotFound(_) => 3,
            SitemapError::TagNotFound(_) | SitemapError::DuplicateUrl(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SitemapError::DiskNotFound(name) => {
                format!(
                    "Disk not configured: '{}'\n\n\
                    Suggestions:\n\
                    • Declare it in sitemap.toml, e.g. [disks.{}] root = \"public\"\n\
                    • Run 'sitemap config --list' to see the configured disks\n\
                    • Use --output to write to a plain file instead",
                    name, name
                )
            }
            SitemapError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset SITEMAP_CONFIG to fall back to ./sitemap.toml",
                    path.display()
                )
            }
            SitemapError::InvalidEntry(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Expected entry fields:\n\
                    • loc = \"https://example.com/\"\n\
                    • lastmod = \"2025-01-17T10:00:00Z\" (RFC 3339, quoted)\n\
                    • changefreq = always, hourly, daily, weekly, monthly, yearly, never\n\
                    • priority = 0.0 to 1.0",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SitemapError
pub type Result<T> = std::result::Result<T, SitemapError>;
