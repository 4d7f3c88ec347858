//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default image host base path.
pub const DEFAULT_BASE_URL: &str = "https://oldschool.runescape.wiki/images";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Input dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// JSON file holding the item -> icon records.
    #[serde(default = "default_mapping_path")]
    pub mapping_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mapping_path: default_mapping_path(),
        }
    }
}

/// Output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving one file per downloaded icon.
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    /// Zip archive written once all downloads have settled.
    #[serde(default = "default_archive_path")]
    pub archive_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            archive_path: default_archive_path(),
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base path icons are requested from.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User agent identifying this tool to the image host.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept header sent with every request.
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            accept: default_accept(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl HttpConfig {
    /// Per-request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Run options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Number of concurrent download workers.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Whether to log each successful download.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to log each failed download.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,

    /// Whether to draw a progress bar while the pool runs.
    #[serde(default)]
    pub show_progress: bool,

    /// Skip the archive step and only populate the output directory.
    #[serde(default)]
    pub skip_archive: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            show_downloads: true,
            show_skipped_downloads: true,
            show_progress: false,
            skip_archive: false,
        }
    }
}

fn default_mapping_path() -> PathBuf {
    PathBuf::from("data/item_icons.json")
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("icons")
}

fn default_archive_path() -> PathBuf {
    PathBuf::from("icons.zip")
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!(
        "icon-downloader/",
        env!("CARGO_PKG_VERSION"),
        " (item icon asset fetcher)"
    )
    .to_string()
}

fn default_accept() -> String {
    "image/avif,image/webp,image/png,image/*;q=0.9,*/*;q=0.8".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_concurrency() -> usize {
    8
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating its directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
