//! Configuration validation logic.

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Upper bound on worker count.
const MAX_CONCURRENCY: usize = 64;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_concurrency(config.options.concurrency)?;
    validate_base_url(&config.http.base_url)?;
    validate_user_agent(&config.http.user_agent)?;

    if config.http.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    if config.input.mapping_path.as_os_str().is_empty() {
        return Err(Error::MissingConfig("mapping_path".to_string()));
    }

    if config.output.directory.as_os_str().is_empty() {
        return Err(Error::MissingConfig("output directory".to_string()));
    }

    if config.output.archive_path.file_name().is_none() {
        return Err(Error::ConfigValidation {
            field: "archive_path".to_string(),
            message: format!(
                "'{}' does not name a file",
                config.output.archive_path.display()
            ),
        });
    }

    Ok(())
}

/// Validate the number of workers.
pub fn validate_concurrency(concurrency: usize) -> Result<()> {
    if concurrency == 0 || concurrency > MAX_CONCURRENCY {
        return Err(Error::ConfigValidation {
            field: "concurrency".to_string(),
            message: format!(
                "Concurrency must be between 1 and {} (got {})",
                MAX_CONCURRENCY, concurrency
            ),
        });
    }

    Ok(())
}

/// Validate the image host base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(Error::MissingConfig("base_url".to_string()));
    }

    let parsed = Url::parse(base_url)?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported scheme '{}'", parsed.scheme()),
        });
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: "Base URL must not carry a query or fragment".to_string(),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    Ok(())
}
