//! Bounded worker pool draining the icon queue.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use indicatif::ProgressBar;
use tokio::task::JoinSet;

use crate::api::IconFetcher;
use crate::download::state::{Outcome, RecordOutcome, RunSummary};
use crate::error::{Error, Result};
use crate::fs::icon_path;
use crate::mapping::IconRecord;

/// Records waiting to be downloaded, shared by all workers.
///
/// Claiming is a single atomic increment, so every record is handed out
/// exactly once and in mapping order, without a lock.
#[derive(Debug)]
pub struct DownloadQueue {
    records: Vec<IconRecord>,
    next: AtomicUsize,
}

impl DownloadQueue {
    /// Create a queue over the full record list.
    pub fn new(records: Vec<IconRecord>) -> Self {
        Self {
            records,
            next: AtomicUsize::new(0),
        }
    }

    /// Claim the next record, or `None` once the queue is drained.
    pub fn claim(&self) -> Option<(usize, &IconRecord)> {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        self.records.get(index).map(|record| (index, record))
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records not yet claimed.
    pub fn remaining(&self) -> usize {
        self.records
            .len()
            .saturating_sub(self.next.load(Ordering::Relaxed))
    }
}

/// Settings for a pool run.
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Number of workers spawned.
    pub concurrency: usize,
    /// Log every successful download.
    pub show_downloads: bool,
    /// Log every failed download.
    pub show_skipped: bool,
    /// Advanced once per claimed record.
    pub progress: Option<ProgressBar>,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            concurrency: 8,
            show_downloads: true,
            show_skipped: true,
            progress: None,
        }
    }
}

/// Download every record with exactly `options.concurrency` workers.
///
/// Per-record failures are logged and counted but never abort the pool.
/// Returns once every worker has seen the queue empty.
pub async fn run_pool<F>(
    fetcher: Arc<F>,
    records: Vec<IconRecord>,
    output_dir: &Path,
    options: &PoolOptions,
) -> Result<RunSummary>
where
    F: IconFetcher + ?Sized + 'static,
{
    if options.concurrency == 0 {
        return Err(Error::ConfigValidation {
            field: "concurrency".to_string(),
            message: "At least one worker is required".to_string(),
        });
    }

    let queue = Arc::new(DownloadQueue::new(records));
    tracing::debug!(
        "Starting {} workers for {} records",
        options.concurrency,
        queue.len()
    );

    let mut workers = JoinSet::new();
    for worker_id in 0..options.concurrency {
        let queue = Arc::clone(&queue);
        let fetcher = Arc::clone(&fetcher);
        let output_dir = output_dir.to_path_buf();
        let options = options.clone();

        workers.spawn(async move {
            run_worker(worker_id, &queue, fetcher.as_ref(), &output_dir, &options).await
        });
    }

    let mut outcomes = Vec::with_capacity(queue.len());
    while let Some(joined) = workers.join_next().await {
        let worker_outcomes =
            joined.map_err(|e| Error::Download(format!("Download worker failed: {}", e)))?;
        outcomes.extend(worker_outcomes);
    }

    Ok(RunSummary::from_outcomes(outcomes))
}

/// Claim and process records until the queue is empty.
async fn run_worker<F>(
    worker_id: usize,
    queue: &DownloadQueue,
    fetcher: &F,
    output_dir: &Path,
    options: &PoolOptions,
) -> Vec<RecordOutcome>
where
    F: IconFetcher + ?Sized,
{
    let mut outcomes = Vec::new();

    while let Some((index, record)) = queue.claim() {
        let outcome = process_record(record, fetcher, output_dir, options).await;
        outcomes.push(RecordOutcome {
            index,
            label: record.label().to_string(),
            outcome,
        });

        if let Some(ref progress) = options.progress {
            progress.inc(1);
        }
    }

    tracing::debug!(
        "Worker {} finished after {} records",
        worker_id,
        outcomes.len()
    );
    outcomes
}

/// Download a single record into the output directory.
async fn process_record<F>(
    record: &IconRecord,
    fetcher: &F,
    output_dir: &Path,
    options: &PoolOptions,
) -> Outcome
where
    F: IconFetcher + ?Sized,
{
    let Some(icon) = record.icon() else {
        tracing::debug!("No icon for record {}, skipping", record.label());
        return Outcome::NoIcon;
    };

    let result = match icon_path(output_dir, icon) {
        Ok(dest) => fetcher.fetch(icon, &dest).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(bytes) => {
            if options.show_downloads {
                tracing::info!("Downloaded: {}", icon);
            }
            Outcome::Downloaded { bytes }
        }
        Err(e) => {
            if options.show_skipped {
                tracing::warn!("Skipped: {} {}", icon, e);
            }
            Outcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
