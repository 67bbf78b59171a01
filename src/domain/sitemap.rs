//! The sitemap aggregate: an ordered, deduplicated set of tags

use super::render::{Renderer, XmlRenderer};
use super::tags::{Tag, UrlTag};
use crate::error::{Result, SitemapError};
use log::{debug, warn};
use std::collections::HashSet;

/// Ordered collection of sitemap tags
///
/// At most one [`Tag::Url`] per url is ever stored. Other tag kinds are kept
/// exactly as added. [`Sitemap::tags`] exposes insertion order; rendering
/// works on a sorted copy and leaves the stored order untouched.
///
/// A `Sitemap` has no internal locking. Share one across threads behind a
/// `Mutex` held for the whole `add` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitemap {
    tags: Vec<Tag>,
}

impl Sitemap {
    pub fn new() -> Self {
        Sitemap::default()
    }

    /// Add a tag, merging it with an existing entry for the same url
    ///
    /// Strings are turned into [`UrlTag`]s with default fields. A url that is
    /// already present is only replaced when the new tag is newer; otherwise
    /// the new tag is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitemap_builder::domain::Sitemap;
    ///
    /// let mut sitemap = Sitemap::new();
    /// sitemap.add("https://example.com").add("https://example.com/about");
    /// sitemap.add("https://example.com");
    /// assert_eq!(sitemap.tags().len(), 2);
    /// ```
    pub fn add(&mut self, tag: impl Into<Tag>) -> &mut Self {
        let candidate = match tag.into() {
            Tag::Url(candidate) => candidate,
            other => {
                self.tags.push(other);
                return self;
            }
        };

        match self.position_of_url(&candidate.url) {
            None => self.tags.push(Tag::Url(candidate)),
            Some(index) => {
                let replace = match &self.tags[index] {
                    Tag::Url(existing) => candidate.is_newer_than(existing),
                    _ => false,
                };

                if replace {
                    debug!("Replacing entry for {} with newer version", candidate.url);
                    self.tags[index] = Tag::Url(candidate);
                } else {
                    debug!("Keeping existing entry for {}", candidate.url);
                }
            }
        }

        self
    }

    /// Replace `old` with `new` at the same position
    ///
    /// `old` is located by value. Fails with [`SitemapError::TagNotFound`]
    /// when no stored entry equals `old`, and with
    /// [`SitemapError::DuplicateUrl`] when `new` changes the url to one that
    /// another entry already holds. The sitemap is unchanged on error.
    pub fn update(&mut self, old: &UrlTag, new: UrlTag) -> Result<&mut Self> {
        let index = self
            .tags
            .iter()
            .position(|tag| tag.as_url() == Some(old))
            .ok_or_else(|| SitemapError::TagNotFound(old.url.clone()))?;

        if new.url != old.url && self.has_url(&new.url) {
            return Err(SitemapError::DuplicateUrl(new.url));
        }

        self.tags[index] = Tag::Url(new);
        Ok(self)
    }

    /// First url entry whose url equals `url`
    pub fn get_url(&self, url: &str) -> Option<&UrlTag> {
        self.tags
            .iter()
            .filter_map(Tag::as_url)
            .find(|tag| tag.url == url)
    }

    pub fn has_url(&self, url: &str) -> bool {
        self.get_url(url).is_some()
    }

    /// Stored tags in insertion order
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags in the order they are rendered
    ///
    /// Sorted by kind and content, one entry per url (the first after
    /// sorting, which is the most recent), with empty tags dropped.
    pub fn rendered_tags(&self) -> Vec<&Tag> {
        let mut sorted: Vec<&Tag> = self.tags.iter().collect();
        sorted.sort();

        let mut seen_urls: HashSet<&str> = HashSet::new();
        sorted
            .into_iter()
            .filter(|&tag| match tag.as_url() {
                Some(url_tag) => seen_urls.insert(url_tag.url.as_str()),
                None => true,
            })
            .filter(|tag| {
                if tag.is_empty() {
                    warn!("Skipping empty {} tag", tag.kind());
                    false
                } else {
                    true
                }
            })
            .collect()
    }

    /// Render the sitemap as XML
    pub fn render(&self) -> Result<String> {
        self.render_with(&XmlRenderer::default())
    }

    /// Render the sitemap with a custom renderer
    pub fn render_with<R: Renderer + ?Sized>(&self, renderer: &R) -> Result<String> {
        renderer.render(&self.rendered_tags())
    }

    fn position_of_url(&self, url: &str) -> Option<usize> {
        self.tags
            .iter()
            .position(|tag| tag.as_url().is_some_and(|existing| existing.url == url))
    }
}

impl<T: Into<Tag>> Extend<T> for Sitemap {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for tag in iter {
            self.add(tag);
        }
    }
}

impl<T: Into<Tag>> FromIterator<T> for Sitemap {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sitemap = Sitemap::new();
        sitemap.extend(iter);
        sitemap
    }
}
