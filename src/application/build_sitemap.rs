//! Sitemap build use case
//!
//! Orchestrates collecting entries from files and arguments into a sitemap
//! and publishing the rendered document.

use crate::domain::Sitemap;
use crate::error::Result;
use crate::infrastructure::{Config, EntriesFile};
use log::{debug, info};
use std::path::PathBuf;

/// Where the rendered sitemap goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The configured default output file
    Default,
    /// A file path (relative paths resolve against the base directory)
    File(PathBuf),
    /// A path on a configured disk
    Disk { name: String, path: String },
    /// Return the document instead of writing it
    Stdout,
}

/// Options for a build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Entries files, added in order
    pub entries: Vec<PathBuf>,

    /// Bare urls, added after all entries files
    pub urls: Vec<String>,

    pub destination: Destination,
}

/// What a build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    File(PathBuf),
    Disk { name: String, path: String },
    Rendered(String),
}

/// Service for building sitemaps
pub struct BuildSitemapService {
    config: Config,
    base_dir: PathBuf,
}

impl BuildSitemapService {
    /// Create new build service
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        BuildSitemapService { config, base_dir }
    }

    /// Collect every entry into a sitemap
    ///
    /// All entries files are parsed and validated before anything is added.
    pub fn collect(&self, options: &BuildOptions) -> Result<Sitemap> {
        let mut tags = Vec::new();
        for path in &options.entries {
            let path = self.resolve(path);
            debug!("Reading entries from {}", path.display());
            tags.extend(EntriesFile::load(&path)?.into_tags()?);
        }

        let mut sitemap = Sitemap::new();
        sitemap.extend(tags);
        sitemap.extend(options.urls.iter().map(String::as_str));

        info!(
            "Collected {} tags ({} urls)",
            sitemap.len(),
            sitemap.tags().iter().filter(|tag| tag.as_url().is_some()).count()
        );
        Ok(sitemap)
    }

    /// Execute the build
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An entries file cannot be read or holds an invalid entry
    /// - The target disk is not configured
    /// - Writing the output fails
    pub fn execute(&self, options: BuildOptions) -> Result<BuildOutcome> {
        let sitemap = self.collect(&options)?;

        match options.destination {
            Destination::Stdout => Ok(BuildOutcome::Rendered(sitemap.render()?)),
            Destination::Disk { name, path } => {
                let storage = self.config.storage(&self.base_dir);
                sitemap.write_to_disk(&storage, &name, &path)?;
                Ok(BuildOutcome::Disk { name, path })
            }
            Destination::File(path) => {
                let path = self.resolve(&path);
                sitemap.write_to_file(&path)?;
                Ok(BuildOutcome::File(path))
            }
            Destination::Default => {
                let path = self.resolve(&self.config.output);
                sitemap.write_to_file(&path)?;
                Ok(BuildOutcome::File(path))
            }
        }
    }

    fn resolve(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SitemapError;
    use std::fs;
    use tempfile::TempDir;

    fn options(destination: Destination) -> BuildOptions {
        BuildOptions {
            entries: Vec::new(),
            urls: Vec::new(),
            destination,
        }
    }

    #[test]
    fn test_urls_after_entries_do_not_override_dated_entries() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("entries.toml"),
            "[[url]]\nloc = \"https://a.com\"\nlastmod = \"2025-01-17\"\npriority = 0.3\n",
        )
        .unwrap();

        let service = BuildSitemapService::new(Config::default(), temp.path().to_path_buf());
        let mut opts = options(Destination::Stdout);
        opts.entries.push(PathBuf::from("entries.toml"));
        opts.urls = vec!["https://a.com".to_string(), "https://b.com".to_string()];

        let sitemap = service.collect(&opts).unwrap();

        assert_eq!(sitemap.len(), 2);
        assert_eq!(sitemap.get_url("https://a.com").unwrap().priority, Some(0.3));
    }

    #[test]
    fn test_default_destination_uses_config_output() {
        let temp = TempDir::new().unwrap();
        let service = BuildSitemapService::new(Config::default(), temp.path().to_path_buf());
        let mut opts = options(Destination::Default);
        opts.urls.push("https://a.com".to_string());

        let outcome = service.execute(opts).unwrap();

        let expected = temp.path().join("sitemap.xml");
        assert_eq!(outcome, BuildOutcome::File(expected.clone()));
        assert!(fs::read_to_string(expected).unwrap().contains("<loc>https://a.com</loc>"));
    }

    #[test]
    fn test_disk_destination() {
        let temp = TempDir::new().unwrap();
        let service = BuildSitemapService::new(Config::default(), temp.path().to_path_buf());
        let mut opts = options(Destination::Disk {
            name: "local".to_string(),
            path: "public/sitemap.xml".to_string(),
        });
        opts.urls.push("https://a.com".to_string());

        service.execute(opts).unwrap();

        assert!(temp.path().join("public/sitemap.xml").exists());
    }

    #[test]
    fn test_unknown_disk() {
        let temp = TempDir::new().unwrap();
        let service = BuildSitemapService::new(Config::default(), temp.path().to_path_buf());

        let result = service.execute(options(Destination::Disk {
            name: "s3".to_string(),
            path: "sitemap.xml".to_string(),
        }));

        assert!(matches!(result, Err(SitemapError::DiskNotFound(_))));
    }

    #[test]
    fn test_missing_entries_file() {
        let temp = TempDir::new().unwrap();
        let service = BuildSitemapService::new(Config::default(), temp.path().to_path_buf());
        let mut opts = options(Destination::Stdout);
        opts.entries.push(PathBuf::from("missing.toml"));

        assert!(matches!(service.collect(&opts), Err(SitemapError::Io(_))));
    }

    #[test]
    fn test_stdout_returns_rendered_document() {
        let temp = TempDir::new().unwrap();
        let service = BuildSitemapService::new(Config::default(), temp.path().to_path_buf());
        let mut opts = options(Destination::Stdout);
        opts.urls.push("https://a.com".to_string());

        match service.execute(opts).unwrap() {
            BuildOutcome::Rendered(xml) => assert!(xml.contains("<urlset")),
            other => panic!("Expected rendered output, got {:?}", other),
        }
    }
}
