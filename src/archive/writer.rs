//! Zip archive creation from the output directory.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};

/// Result of a finished archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Where the archive was written.
    pub path: PathBuf,
    /// Number of files stored.
    pub entries: usize,
    /// Files left out because another file already claimed their name.
    pub collisions: usize,
}

/// Zip every file under `source_dir` into `dest_zip`.
///
/// Entries are stored flat under their bare file name. An existing archive
/// at `dest_zip` is replaced. Any read or write error aborts the archive.
pub async fn build_archive(source_dir: &Path, dest_zip: &Path) -> Result<ArchiveReport> {
    let source_dir = source_dir.to_path_buf();
    let dest_zip = dest_zip.to_path_buf();

    tokio::task::spawn_blocking(move || write_archive(&source_dir, &dest_zip))
        .await
        .map_err(|e| Error::Archive(format!("Archive task failed: {}", e)))?
}

/// Blocking implementation of [`build_archive`].
pub fn write_archive(source_dir: &Path, dest_zip: &Path) -> Result<ArchiveReport> {
    if !source_dir.is_dir() {
        return Err(Error::Archive(format!(
            "Source directory not found: {}",
            source_dir.display()
        )));
    }

    if let Some(parent) = dest_zip.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(dest_zip)?;
    let result = dest_zip
        .canonicalize()
        .map_err(Error::from)
        .and_then(|dest_abs| write_entries(file, source_dir, &dest_abs));

    match result {
        Ok((entries, collisions)) => {
            tracing::debug!(
                "Wrote {} entries to {} ({} name collisions)",
                entries,
                dest_zip.display(),
                collisions
            );
            Ok(ArchiveReport {
                path: dest_zip.to_path_buf(),
                entries,
                collisions,
            })
        }
        Err(e) => {
            let _ = fs::remove_file(dest_zip);
            Err(e)
        }
    }
}

/// Stream the files into the zip writer; returns (entries, collisions).
fn write_entries(file: File, source_dir: &Path, dest_abs: &Path) -> Result<(usize, usize)> {
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    let mut names = HashSet::new();
    let mut entries = 0;
    let mut collisions = 0;

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();

        // The archive may live inside the directory it is built from.
        if path.canonicalize()?.as_path() == dest_abs {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !names.insert(name.clone()) {
            tracing::warn!(
                "Archive already has an entry named '{}', leaving out {}",
                name,
                path.display()
            );
            collisions += 1;
            continue;
        }

        writer.start_file(name, options)?;
        let mut input = File::open(path)?;
        io::copy(&mut input, &mut writer)?;
        entries += 1;
    }

    writer.finish()?;
    Ok((entries, collisions))
}
