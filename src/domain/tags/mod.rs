//! Tag system
//!
//! A [`Tag`] is anything that can be rendered into a sitemap document. Only
//! [`Tag::Url`] takes part in merging; the other kinds are carried through
//! as they were added.

pub mod annotation;
pub mod frequency;
pub mod url;

// Re-export main types
pub use annotation::{AlternateTag, ImageTag};
pub use frequency::ChangeFrequency;
pub use url::UrlTag;

use std::cmp::Ordering;

/// A renderable sitemap element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Url(UrlTag),
    Alternate(AlternateTag),
    Image(ImageTag),
}

impl Tag {
    /// Name of the tag kind, also its precedence when sorting
    pub fn kind(&self) -> &'static str {
        match self {
            Tag::Url(_) => "url",
            Tag::Alternate(_) => "alternate",
            Tag::Image(_) => "image",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Tag::Url(_) => 0,
            Tag::Alternate(_) => 1,
            Tag::Image(_) => 2,
        }
    }

    /// The url entry, if this is one
    pub fn as_url(&self) -> Option<&UrlTag> {
        match self {
            Tag::Url(tag) => Some(tag),
            _ => None,
        }
    }

    /// True for tags that would render without a location
    pub fn is_empty(&self) -> bool {
        match self {
            Tag::Url(tag) => tag.is_empty(),
            Tag::Alternate(tag) => tag.is_empty(),
            Tag::Image(tag) => tag.is_empty(),
        }
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Tag::Url(a), Tag::Url(b)) => a.cmp(b),
            (Tag::Alternate(a), Tag::Alternate(b)) => a.cmp(b),
            (Tag::Image(a), Tag::Image(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for Tag {
    fn from(url: &str) -> Self {
        Tag::Url(UrlTag::new(url))
    }
}

impl From<String> for Tag {
    fn from(url: String) -> Self {
        Tag::Url(UrlTag::new(url))
    }
}

impl From<UrlTag> for Tag {
    fn from(tag: UrlTag) -> Self {
        Tag::Url(tag)
    }
}

impl From<AlternateTag> for Tag {
    fn from(tag: AlternateTag) -> Self {
        Tag::Alternate(tag)
    }
}

impl From<ImageTag> for Tag {
    fn from(tag: ImageTag) -> Self {
        Tag::Image(tag)
    }
}
