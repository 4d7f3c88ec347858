//! Per-record outcomes and run statistics.

/// What happened to a single queued record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The icon was written to the output directory.
    Downloaded { bytes: u64 },
    /// The download failed and the record was skipped.
    Failed { reason: String },
    /// The record carries no icon identifier; nothing was requested.
    NoIcon,
}

/// Outcome of one record, tagged with its queue position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Position of the record in the original mapping.
    pub index: usize,
    /// Icon identifier (or item name) used in logs.
    pub label: String,
    pub outcome: Outcome,
}

/// Statistics for a whole pool run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: u64,
    pub failed: u64,
    pub no_icon: u64,
    pub bytes_downloaded: u64,

    /// Failed records as (label, reason), in queue order.
    pub failures: Vec<(String, String)>,
}

impl RunSummary {
    /// Build a summary from individual outcomes.
    pub fn from_outcomes(mut outcomes: Vec<RecordOutcome>) -> Self {
        outcomes.sort_by_key(|o| o.index);

        let mut summary = Self::default();
        for record in outcomes {
            summary.record(record);
        }
        summary
    }

    /// Fold one outcome into the statistics.
    pub fn record(&mut self, record: RecordOutcome) {
        match record.outcome {
            Outcome::Downloaded { bytes } => {
                self.succeeded += 1;
                self.bytes_downloaded += bytes;
            }
            Outcome::Failed { reason } => {
                self.failed += 1;
                self.failures.push((record.label, reason));
            }
            Outcome::NoIcon => self.no_icon += 1,
        }
    }

    /// Records for which a download was attempted.
    pub fn attempted(&self) -> u64 {
        self.succeeded + self.failed
    }

    /// Every record that was claimed from the queue.
    pub fn total(&self) -> u64 {
        self.attempted() + self.no_icon
    }
}
