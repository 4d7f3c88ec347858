//! End-to-end run: mapping -> worker pool -> archive.

use std::sync::Arc;

use crate::api::{IconClient, IconFetcher};
use crate::archive::{build_archive, ArchiveReport};
use crate::config::Config;
use crate::download::{run_pool, PoolOptions, RunSummary};
use crate::error::Result;
use crate::fs::ensure_dir;
use crate::mapping::load_mapping;
use crate::output::create_item_bar;

/// Everything a finished run produced.
#[derive(Debug)]
pub struct PipelineReport {
    pub summary: RunSummary,
    /// `None` when archiving was disabled.
    pub archive: Option<ArchiveReport>,
}

/// Run the whole pipeline against the configured image host.
pub async fn run_pipeline(config: &Config) -> Result<PipelineReport> {
    let client = IconClient::new(&config.http)?;
    run_pipeline_with(config, Arc::new(client)).await
}

/// Run the whole pipeline with the given fetcher.
///
/// Mapping, output-directory and archive errors abort the run; download
/// failures only show up in the summary. The archive is built after the
/// pool has fully drained.
pub async fn run_pipeline_with<F>(config: &Config, fetcher: Arc<F>) -> Result<PipelineReport>
where
    F: IconFetcher + ?Sized + 'static,
{
    let records = load_mapping(&config.input.mapping_path)?;

    let output_dir = &config.output.directory;
    ensure_dir(output_dir)?;

    let progress = config
        .options
        .show_progress
        .then(|| create_item_bar(records.len() as u64, "Icons"));

    let pool_options = PoolOptions {
        concurrency: config.options.concurrency,
        show_downloads: config.options.show_downloads,
        show_skipped: config.options.show_skipped_downloads,
        progress: progress.clone(),
    };

    let summary = run_pool(fetcher, records, output_dir, &pool_options).await?;

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    tracing::info!(
        "Downloads settled: {} succeeded, {} skipped, {} without icon",
        summary.succeeded,
        summary.failed,
        summary.no_icon
    );

    let archive = if config.options.skip_archive {
        tracing::info!("Archive step disabled");
        None
    } else {
        let report = build_archive(output_dir, &config.output.archive_path).await?;
        tracing::info!(
            "Archive written: {} ({} files)",
            report.path.display(),
            report.entries
        );
        Some(report)
    };

    Ok(PipelineReport { summary, archive })
}
