//! Worker pool: one thread per partition, joined before returning.

use anyhow::{Result, anyhow};
use log::debug;
use std::path::{Path, PathBuf};
use std::thread;

use crate::types::ProgressLock;

/// Run the processing function over every partition.
///
/// A single fresh [`ProgressLock`] is created per call and handed to every
/// invocation of `func`, in both modes. With one partition the files are
/// processed inline on the calling thread; with more, one scoped thread per
/// partition runs them concurrently, each partition in discovery order.
///
/// Blocks until every worker has finished. The first worker error (or panic)
/// is returned after all workers are joined; there is no retry and no
/// partial-result handling.
pub fn dispatch<F>(partitions: &[Vec<PathBuf>], func: &F) -> Result<()>
where
    F: Fn(&Path, &ProgressLock) -> Result<()> + Send + Sync,
{
    let lock = ProgressLock::default();

    if partitions.len() == 1 {
        for file in &partitions[0] {
            func(file, &lock)?;
        }
        return Ok(());
    }

    thread::scope(|scope| {
        let lock = &lock;
        let handles: Vec<_> = partitions
            .iter()
            .map(|files| scope.spawn(move || worker_loop(files, func, lock)))
            .collect();

        {
            let _held = lock.lock().unwrap();
            debug!("Waiting for processing threads.");
        }

        let mut first_err = None;
        for handle in handles {
            let outcome = match handle.join() {
                Ok(res) => res,
                Err(_) => Err(anyhow!("worker thread panicked")),
            };
            if let Err(err) = outcome
                && first_err.is_none()
            {
                first_err = Some(err);
            }
        }
        match first_err {
            None => Ok(()),
            Some(err) => Err(err),
        }
    })
}

/// One worker: announce the partition size under the lock, then process every
/// file in order, passing the shared lock through to the processing function.
fn worker_loop<F>(files: &[PathBuf], func: &F, lock: &ProgressLock) -> Result<()>
where
    F: Fn(&Path, &ProgressLock) -> Result<()>,
{
    {
        let _held = lock.lock().unwrap();
        debug!("Started worker with {} files.", files.len());
    }

    for file in files {
        func(file, lock)?;
    }
    Ok(())
}
