//! Entries files: sitemap tags declared in TOML

use crate::domain::{AlternateTag, ChangeFrequency, ImageTag, Tag, UrlTag};
use crate::error::{Result, SitemapError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A `[[url]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<f32>,
    #[serde(default)]
    pub alternates: Vec<AlternateTag>,
    #[serde(default)]
    pub images: Vec<ImageTag>,
}

/// Parsed contents of an entries file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntriesFile {
    #[serde(default)]
    pub url: Vec<UrlEntry>,
    #[serde(default)]
    pub alternate: Vec<AlternateTag>,
    #[serde(default)]
    pub image: Vec<ImageTag>,
}

impl EntriesFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Convert every entry into a tag, in file order (urls first)
    ///
    /// Dates and frequencies are validated here, before anything is added
    /// to a sitemap.
    pub fn into_tags(self) -> Result<Vec<Tag>> {
        let mut tags = Vec::with_capacity(self.url.len() + self.alternate.len() + self.image.len());

        for entry in self.url {
            tags.push(Tag::Url(entry.into_url_tag()?));
        }
        tags.extend(self.alternate.into_iter().map(Tag::Alternate));
        tags.extend(self.image.into_iter().map(Tag::Image));

        Ok(tags)
    }
}

impl UrlEntry {
    fn into_url_tag(self) -> Result<UrlTag> {
        let mut tag = UrlTag::new(self.loc);

        if let Some(lastmod) = self.lastmod {
            tag.last_modified = Some(parse_lastmod(&lastmod).map_err(|e| {
                SitemapError::InvalidEntry(format!("{}: bad lastmod '{}': {}", tag.url, lastmod, e))
            })?);
        }
        if let Some(changefreq) = self.changefreq {
            let frequency = ChangeFrequency::from_str(&changefreq)
                .map_err(|e| SitemapError::InvalidEntry(format!("{}: {}", tag.url, e)))?;
            tag = tag.with_change_frequency(frequency);
        }
        if let Some(priority) = self.priority {
            tag = tag.with_priority(priority);
        }
        tag.alternates = self.alternates;
        tag.images = self.images;

        Ok(tag)
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC)
pub fn parse_lastmod(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| "expected RFC 3339 timestamp or YYYY-MM-DD".to_string())
}
