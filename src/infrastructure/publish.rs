//! Writing rendered sitemaps to files, disks and HTTP responses

use super::storage::Storage;
use crate::domain::Sitemap;
use crate::error::Result;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Content type sent with rendered sitemaps
pub const CONTENT_TYPE: &str = "text/xml";

/// An HTTP response carrying a rendered sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl SitemapResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// Output operations (filesystem and storage specific)
impl Sitemap {
    /// Render and write the document to `path`, replacing any existing file
    ///
    /// The file is closed on every exit path; I/O errors are returned as is.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<&Self> {
        let path = path.as_ref();
        let rendered = self.render()?;

        let mut file = File::create(path)?;
        file.write_all(rendered.as_bytes())?;
        file.flush()?;

        info!("Wrote sitemap with {} tags to {}", self.len(), path.display());
        Ok(self)
    }

    /// Render and store the document at `path` on the named disk
    pub fn write_to_disk(&self, storage: &Storage, disk: &str, path: &str) -> Result<&Self> {
        let target = storage.disk(disk)?;
        let rendered = self.render()?;

        target.put(path, rendered.as_bytes())?;

        info!("Wrote sitemap with {} tags to {}:{}", self.len(), disk, path);
        Ok(self)
    }

    /// Wrap the rendered document in a successful XML response
    pub fn to_response(&self) -> Result<SitemapResponse> {
        Ok(SitemapResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), CONTENT_TYPE.to_string())],
            body: self.render()?,
        })
    }
}
