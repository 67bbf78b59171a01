//! Alternate-language links and image annotations

use serde::{Deserialize, Serialize};

/// An `xhtml:link rel="alternate"` pointing at a localized version of a page
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlternateTag {
    pub locale: String,
    pub url: String,
}

impl AlternateTag {
    pub fn new(locale: impl Into<String>, url: impl Into<String>) -> Self {
        AlternateTag {
            locale: locale.into(),
            url: url.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
    }
}

/// An `image:image` entry
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ImageTag {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl ImageTag {
    pub fn new(url: impl Into<String>) -> Self {
        ImageTag {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_geo_location(mut self, geo_location: impl Into<String>) -> Self {
        self.geo_location = Some(geo_location.into());
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
    }
}
