//! Icon file-name validation.

use crate::error::{Error, Result};

/// Check that an icon identifier can be used verbatim as a file name.
///
/// Icons keep their exact identifier on disk (spaces included), so nothing
/// is rewritten here; identifiers that could escape the output directory
/// are rejected instead.
pub fn validate_icon_filename(icon: &str) -> Result<&str> {
    if icon.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    if icon == "." || icon == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            icon
        )));
    }

    if icon.contains('/') || icon.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            icon
        )));
    }

    if icon.chars().any(|c| c.is_control()) {
        return Err(Error::InvalidFilename(format!(
            "Control characters not allowed in filename: '{}'",
            icon.escape_default()
        )));
    }

    Ok(icon)
}
