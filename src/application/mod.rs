//! Application layer - Use cases and orchestration

pub mod build_sitemap;

pub use build_sitemap::{BuildOptions, BuildOutcome, BuildSitemapService, Destination};
