//! Url entries, the only tag kind that merges by identity

use super::{AlternateTag, ChangeFrequency, ImageTag};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Priority assigned to entries created from a bare url string
pub const DEFAULT_PRIORITY: f32 = 0.8;

/// A `<url>` entry
///
/// The `url` field identifies the entry inside a sitemap: two tags with the
/// same `url` are the same page, whatever their other fields say.
#[derive(Debug, Clone)]
pub struct UrlTag {
    pub url: String,
    pub last_modified: Option<DateTime<Utc>>,
    pub change_frequency: Option<ChangeFrequency>,
    pub priority: Option<f32>,
    pub alternates: Vec<AlternateTag>,
    pub images: Vec<ImageTag>,
}

impl UrlTag {
    /// Create an entry with the default change frequency and priority
    ///
    /// # Examples
    ///
    /// ```
    /// use sitemap_builder::domain::tags::{ChangeFrequency, UrlTag};
    ///
    /// let tag = UrlTag::new("https://example.com/blog");
    /// assert_eq!(tag.change_frequency, Some(ChangeFrequency::Daily));
    /// assert_eq!(tag.priority, Some(0.8));
    /// assert!(tag.last_modified.is_none());
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        UrlTag {
            url: url.into(),
            last_modified: None,
            change_frequency: Some(ChangeFrequency::default()),
            priority: Some(DEFAULT_PRIORITY),
            alternates: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    pub fn with_change_frequency(mut self, change_frequency: ChangeFrequency) -> Self {
        self.change_frequency = Some(change_frequency);
        self
    }

    /// Set the priority, clamped into `0.0..=1.0`
    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = Some(clamp_priority(priority));
        self
    }

    pub fn with_alternate(mut self, locale: impl Into<String>, url: impl Into<String>) -> Self {
        self.alternates.push(AlternateTag::new(locale, url));
        self
    }

    pub fn with_image(mut self, image: ImageTag) -> Self {
        self.images.push(image);
        self
    }

    /// Whether this entry should replace `existing` when both share a url
    ///
    /// An undated candidate never wins. A dated candidate beats an undated
    /// entry, and otherwise has to be strictly more recent.
    pub fn is_newer_than(&self, existing: &UrlTag) -> bool {
        match (self.last_modified, existing.last_modified) {
            (Some(candidate), Some(current)) => candidate > current,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
    }
}

fn clamp_priority(priority: f32) -> f32 {
    // Also folds -0.0 into 0.0
    if priority.is_nan() || priority <= 0.0 {
        0.0
    } else {
        priority.min(1.0)
    }
}

// Same url sorts newest first so that the first survivor of a url dedup is
// the most recent entry. Undated entries sort after dated ones.
impl Ord for UrlTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.url
            .cmp(&other.url)
            .then_with(|| match (self.last_modified, other.last_modified) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.change_frequency.cmp(&other.change_frequency))
            .then_with(|| match (self.priority, other.priority) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (a, b) => a.is_some().cmp(&b.is_some()),
            })
            .then_with(|| self.alternates.cmp(&other.alternates))
            .then_with(|| self.images.cmp(&other.images))
    }
}

impl PartialOrd for UrlTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for UrlTag {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for UrlTag {}
