//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for item counts.
pub fn create_item_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    // The template is static; fall back to the default style if it is ever rejected.
    if let Ok(style) = ProgressStyle::default_bar().template(&format!(
        "{{spinner:.green}} {} [{{bar:40.cyan/blue}}] {{pos}}/{{len}}",
        message
    )) {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}
