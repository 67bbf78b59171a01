//! sitemap-builder - Ordered, deduplicated XML sitemaps
//!
//! Collects url entries and annotations into a [`Sitemap`], keeping a single
//! entry per url (the most recently modified one), and renders the result as
//! a sitemap document that can be written to a file, a named disk, or an
//! HTTP response.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Sitemap, Tag, UrlTag};
pub use error::SitemapError;
