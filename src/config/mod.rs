//! Configuration module for the icon-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, HttpConfig, InputConfig, OptionsConfig, OutputConfig, DEFAULT_BASE_URL};
pub use validation::validate_config;
