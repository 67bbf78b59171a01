//! Domain layer - Sitemap model and rendering

pub mod render;
pub mod sitemap;
mod sitemap_proptest;
pub mod tags;

pub use render::{Renderer, XmlRenderer};
pub use sitemap::Sitemap;
pub use tags::{AlternateTag, ChangeFrequency, ImageTag, Tag, UrlTag};
