//! Rambler: directory tree scanner with a fixed worker pool.
//!
//! One pass over the tree filters files by extension (plus an optional
//! custom check) and deals the accepted paths round-robin into one
//! partition per worker; the dispatcher then runs every partition
//! concurrently, applying a caller-supplied processing function to each
//! file. Partitioning is static, so it assumes roughly uniform per-file
//! cost; there is no work stealing, rebalancing, or cancellation.

pub mod scan;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::{Counters, FilenameCheck, ProgressLock, Settings};

/// Result alias used by the public rambler API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

use log::debug;
use std::path::Path;

/// Single entry point: scan `root` with `settings`, calling `func` on every
/// accepted file, and return the aggregate counters.
///
/// `func` receives each file path together with the per-scan
/// [`ProgressLock`]; the core takes the lock only around its own log lines,
/// so whether `func` uses it for anything further is between `func` and the
/// caller. `func` returning an error aborts the scan.
pub fn scan_dir<P, F>(root: P, func: F, settings: &Settings) -> Result<Counters>
where
    P: AsRef<Path>,
    F: Fn(&Path, &ProgressLock) -> Result<()> + Send + Sync,
{
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        settings
    );
    scan::orchestrator::scan(root, func, settings)
}
