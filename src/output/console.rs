//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Icon Downloader                                   ║
║     Fetch item icons and bundle them into a zip       ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    mapping: &str,
    base_url: &str,
    output_dir: &str,
    archive: Option<&str>,
    concurrency: usize,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Mapping:     {}", mapping);
    println!("  Image host:  {}", base_url);
    println!("  Directory:   {}", output_dir);
    println!("  Archive:     {}", archive.unwrap_or("(skipped)"));
    println!("  Concurrency: {}", concurrency);
    println!();
}
