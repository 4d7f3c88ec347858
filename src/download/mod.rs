//! Download module for icon fetching.
//!
//! This module provides:
//! - The shared download queue
//! - The bounded worker pool
//! - Per-record outcome tracking

pub mod pool;
pub mod state;

pub use pool::{run_pool, DownloadQueue, PoolOptions};
pub use state::{Outcome, RecordOutcome, RunSummary};
