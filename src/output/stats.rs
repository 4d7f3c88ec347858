//! Statistics reporting.

use console::style;

use crate::archive::ArchiveReport;
use crate::download::RunSummary;

/// Print the statistics of a finished run.
pub fn print_run_stats(summary: &RunSummary, archive: Option<&ArchiveReport>) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Statistics:").bold());
    println!("  Downloaded: {}", summary.succeeded);
    if summary.failed > 0 {
        println!("  Skipped:    {}", style(summary.failed).red());
    } else {
        println!("  Skipped:    0");
    }
    println!("  No icon:    {}", summary.no_icon);
    println!("  Bytes:      {}", summary.bytes_downloaded);
    if let Some(report) = archive {
        println!(
            "  Archive:    {} ({} entries)",
            report.path.display(),
            report.entries
        );
    }

    if !summary.failures.is_empty() {
        println!();
        println!("{}", style("Skipped icons:").bold());
        for (label, reason) in &summary.failures {
            println!("  {} {}", label, style(reason).dim());
        }
    }
    println!("{}", style("═".repeat(50)).dim());
    print_summary(summary.succeeded, summary.failed);
}

/// Print the one-line success/skip summary.
pub fn print_summary(succeeded: u64, skipped: u64) {
    println!("{}", summary_line(succeeded, skipped));
}

/// Plain-text summary line.
pub fn summary_line(succeeded: u64, skipped: u64) -> String {
    format!("{} succeeded, {} skipped", succeeded, skipped)
}
