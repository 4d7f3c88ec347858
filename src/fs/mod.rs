//! Filesystem module.
//!
//! Provides:
//! - Output directory management
//! - Icon file-name validation

pub mod naming;
pub mod paths;

pub use naming::validate_icon_filename;
pub use paths::{ensure_dir, icon_path};
