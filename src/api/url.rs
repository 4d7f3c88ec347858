//! Icon URL construction.

use crate::config::DEFAULT_BASE_URL;

/// Build the download URL for an icon on the default image host.
pub fn build_icon_url(icon: &str) -> String {
    build_icon_url_with_base(DEFAULT_BASE_URL, icon)
}

/// Build the download URL for an icon below `base`.
///
/// Spaces become underscores before percent-encoding, matching how the
/// image host names its files. The identifier itself is not validated.
pub fn build_icon_url_with_base(base: &str, icon: &str) -> String {
    let normalized = icon.replace(' ', "_");
    let encoded = urlencoding::encode(&normalized);
    format!("{}/{}", base.trim_end_matches('/'), encoded)
}
