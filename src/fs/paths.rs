//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::naming::validate_icon_filename;

/// Get the output path for an icon inside the output directory.
pub fn icon_path(output_dir: &Path, icon: &str) -> Result<PathBuf> {
    let name = validate_icon_filename(icon)?;
    Ok(output_dir.join(name))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Output path exists and is not a directory: {}", path.display()),
        )));
    }

    std::fs::create_dir_all(path)?;
    Ok(())
}
