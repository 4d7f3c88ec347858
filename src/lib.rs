//! Icon Downloader - fetch item icon images and bundle them into a zip.
//!
//! This library provides the pieces of a small asset-fetching pipeline.
//!
//! # Features
//!
//! - Load an item -> icon mapping from JSON
//! - Build image-host URLs from icon identifiers
//! - Download icons with a bounded pool of workers, tolerating failures
//! - Bundle the downloaded files into a single zip archive
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use icon_downloader::{run_pipeline, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("icons.toml"))?;
//!     let report = run_pipeline(&config).await?;
//!
//!     println!(
//!         "{} succeeded, {} skipped",
//!         report.summary.succeeded, report.summary.failed
//!     );
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod archive;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod mapping;
pub mod output;
pub mod pipeline;

// Re-exports for convenience
pub use api::{build_icon_url, build_icon_url_with_base, IconClient, IconFetcher};
pub use archive::{build_archive, ArchiveReport};
pub use config::Config;
pub use download::{run_pool, DownloadQueue, PoolOptions, RunSummary};
pub use error::{Error, Result};
pub use mapping::{load_mapping, IconRecord};
pub use pipeline::{run_pipeline, run_pipeline_with, PipelineReport};
