//! Rambler CLI: scan a tree, log every matched file, optionally copy matches.

mod cli;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::Path;

use cli::Cli;
use rambler::utils::fs_ops::{copy_file, create_dir, path_suffix};
use rambler::utils::setup_logging;
use rambler::{Counters, ProgressLock};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level());

    let settings = cli.settings()?;
    let root = cli.dir.clone();
    let copy_to = cli.copy_to.clone();

    let counters = rambler::scan_dir(
        &cli.dir,
        move |file, lock| process_file(file, lock, &root, copy_to.as_deref()),
        &settings,
    )?;

    report(&counters);
    Ok(())
}

/// Per-file action: log the path (serialized on the scan's lock), and copy it
/// into the destination tree when one was given.
fn process_file(
    file: &Path,
    lock: &ProgressLock,
    root: &Path,
    copy_to: Option<&Path>,
) -> Result<()> {
    {
        let _held = lock.lock().unwrap();
        info!("{}", file.display());
    }

    if let Some(dst_root) = copy_to {
        let suffix = path_suffix(file, root).unwrap_or_else(|| file.to_path_buf());
        let dst = dst_root.join(suffix);
        if let Some(parent) = dst.parent() {
            create_dir(parent)?;
        }
        copy_file(file, &dst)?;
    }
    Ok(())
}

fn report(counters: &Counters) {
    info!(
        "Done: {} processed, {} skipped, {} dirs, {:.3}s.",
        counters.files_processed,
        counters.files_skipped,
        counters.dirs_visited,
        counters.elapsed.as_secs_f64()
    );
}
