//! Scan lifecycle: walk, dispatch, time, aggregate.

use anyhow::Result;
use log::info;
use std::path::Path;
use std::time::Instant;

use super::dispatch::dispatch;
use super::walker::Walker;
use crate::types::{Counters, ProgressLock, Settings};

/// Scan `root` with `settings`, applying `func` to every accepted file.
///
/// Runs the walker (single-threaded, fills one partition per worker), then
/// the dispatcher (one thread per partition), and returns the final counters
/// with `elapsed` set to the wall-clock duration of the whole scan.
///
/// Any filesystem error during traversal and any error returned by `func`
/// aborts the scan; no partial counters are returned.
pub fn scan<P, F>(root: P, func: F, settings: &Settings) -> Result<Counters>
where
    P: AsRef<Path>,
    F: Fn(&Path, &ProgressLock) -> Result<()> + Send + Sync,
{
    let start = Instant::now();

    let mut walker = Walker::new(settings);
    walker.walk(root.as_ref())?;
    let (partitions, mut counters) = walker.into_parts();

    dispatch(&partitions, &func)?;

    counters.elapsed = start.elapsed();
    info!("Running time: {:.3} secs.", counters.elapsed.as_secs_f64());
    Ok(counters)
}
