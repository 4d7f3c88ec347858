//! Error types for the icon-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Input errors
    #[error("Invalid icon mapping: {0}")]
    Mapping(String),

    // Download errors
    #[error("HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // Archive errors
    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for an error that aborted the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::Mapping(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::UrlParse(_) => exit_codes::CONFIG_ERROR,
            Error::Archive(_) | Error::Zip(_) | Error::Walk(_) | Error::Io(_) => {
                exit_codes::OUTPUT_ERROR
            }
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
///
/// Per-record download failures never change the exit code; only errors
/// that abort the whole run do.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 3;
    pub const OUTPUT_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
