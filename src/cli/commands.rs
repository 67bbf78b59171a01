//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitemap")]
#[command(about = "Build deduplicated XML sitemaps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $SITEMAP_CONFIG, then ./sitemap.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Sources of sitemap entries
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Urls to add with default fields
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// TOML entries file (repeatable)
    #[arg(short, long = "entries", value_name = "FILE")]
    pub entries: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a sitemap and write it out
    Build {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output file (default: the configured output)
        #[arg(short, long, conflicts_with_all = ["disk", "stdout"])]
        output: Option<PathBuf>,

        /// Configured disk to write to
        #[arg(short, long, conflicts_with = "stdout")]
        disk: Option<String>,

        /// Path on the disk (default: sitemap.xml)
        #[arg(long, requires = "disk")]
        path: Option<String>,

        /// Print the document instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Print the rendered document
    Show {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Show the resolved configuration
    Config {
        /// List configured disks with their roots
        #[arg(short, long)]
        list: bool,
    },
}
