//! Archive module bundling downloaded icons into a single zip file.

pub mod writer;

pub use writer::{build_archive, write_archive, ArchiveReport};
