//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Item icon downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "icon-downloader",
    version,
    about = "Download item icon images and bundle them into a zip archive",
    long_about = "Reads a JSON mapping of items to icon identifiers, downloads every icon \
                  with a bounded pool of workers and zips the results.\n\n\
                  Individual download failures are logged and skipped; the run still \
                  succeeds and archives whatever was downloaded."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "icons.toml")]
    pub config: PathBuf,

    /// JSON file mapping items to icon identifiers.
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Directory receiving the downloaded icons.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Path of the zip archive to write.
    #[arg(short = 'o', long = "archive")]
    pub archive_path: Option<PathBuf>,

    /// Number of concurrent download workers.
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Base URL icons are requested from.
    #[arg(long = "base-url", env = "ICON_BASE_URL")]
    pub base_url: Option<String>,

    /// User agent sent to the image host.
    #[arg(long = "user-agent", env = "ICON_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Only download; do not build the archive.
    #[arg(long)]
    pub no_archive: bool,

    /// Show a progress bar while downloading.
    #[arg(long)]
    pub progress: bool,

    /// Hide per-icon download lines.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    pub init: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(mapping) = self.mapping {
            config.input.mapping_path = mapping;
        }

        if let Some(dir) = self.output_directory {
            config.output.directory = dir;
        }

        if let Some(archive) = self.archive_path {
            config.output.archive_path = archive;
        }

        if let Some(concurrency) = self.concurrency {
            config.options.concurrency = concurrency;
        }

        if let Some(base_url) = self.base_url {
            config.http.base_url = base_url;
        }

        if let Some(user_agent) = self.user_agent {
            config.http.user_agent = user_agent;
        }

        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = timeout;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_archive {
            config.options.skip_archive = true;
        }

        if self.progress {
            config.options.show_progress = true;
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }
    }
}
