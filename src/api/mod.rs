//! Image host API module.
//!
//! This module provides:
//! - Icon URL construction
//! - HTTP client streaming icons to disk

pub mod client;
pub mod url;

pub use self::client::{IconClient, IconFetcher};
pub use self::url::{build_icon_url, build_icon_url_with_base};
