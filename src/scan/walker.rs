//! Depth-bounded traversal that fills one partition per worker, round-robin.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::filter;
use crate::types::{Counters, Settings};

/// Single-threaded tree walker. One instance per scan: it owns the partitions
/// and counters while the tree is traversed, then hands both off via
/// [`into_parts`](Walker::into_parts).
pub struct Walker<'a> {
    settings: &'a Settings,
    partitions: Vec<Vec<PathBuf>>,
    counters: Counters,
    next_partition: usize,
}

impl<'a> Walker<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            partitions: vec![Vec::new(); settings.worker_count()],
            counters: Counters::default(),
            next_partition: 0,
        }
    }

    /// List the direct children of `root` and classify each one: extensioned
    /// entries go through the accept/reject step, extensionless directories
    /// are descended into when `check_subdirs` is set, everything else is
    /// silently ignored. Filesystem errors abort the walk.
    pub fn walk(&mut self, root: &Path) -> Result<()> {
        self.log_settings(root);

        for path in sorted_children(root)? {
            if filter::has_extension(&path) {
                self.add_file(path);
            } else if self.settings.check_subdirs && path.is_dir() {
                self.scan_subdir(&path, 1)?;
            }
        }

        info!(
            "{} files are detected in {} dirs while {} files are skipped.",
            self.counters.files_processed, self.counters.dirs_visited, self.counters.files_skipped
        );
        Ok(())
    }

    /// Consume the walker, yielding the filled partitions and the traversal
    /// counters (`elapsed` is still zero; the orchestrator sets it).
    pub fn into_parts(self) -> (Vec<Vec<PathBuf>>, Counters) {
        (self.partitions, self.counters)
    }

    fn scan_subdir(&mut self, dir: &Path, depth: usize) -> Result<()> {
        self.counters.dirs_visited += 1;

        for path in sorted_children(dir)? {
            if filter::has_extension(&path) {
                self.add_file(path);
            } else if path.is_dir()
                && (self.settings.max_subdir_depth == 0 || depth < self.settings.max_subdir_depth)
            {
                self.scan_subdir(&path, depth + 1)?;
            }
            // Extensionless entries at or beyond the depth bound are dropped
            // without touching any counter.
        }
        Ok(())
    }

    /// The accept/reject step: the sole mutation point for the partitions and
    /// the processed/skipped counters. Accepted file `i` (discovery order)
    /// always lands in partition `i % worker_count`.
    fn add_file(&mut self, file: PathBuf) {
        if filter::accept(self.settings, &file) {
            self.counters.files_processed += 1;
            self.partitions[self.next_partition].push(file);
            self.next_partition = (self.next_partition + 1) % self.settings.worker_count();
        } else {
            self.counters.files_skipped += 1;
        }
    }

    fn log_settings(&self, root: &Path) {
        let s = self.settings;
        let mut msg = format!("\nRoot dir: {}", root.display());
        msg.push_str("\nMax subdir level: ");
        if !s.check_subdirs {
            msg.push_str("skip subdirs");
        } else if s.max_subdir_depth == 0 {
            msg.push_str("any");
        } else {
            msg.push_str(&s.max_subdir_depth.to_string());
        }
        msg.push_str("\nAllowed file extensions: ");
        if s.ext_list.is_empty() {
            msg.push_str("any");
        } else {
            for ext in &s.ext_list {
                msg.push_str(ext);
                msg.push(' ');
            }
        }
        if !s.skip_ext_list.is_empty() {
            msg.push_str("\nForbidden file extensions: ");
            for ext in &s.skip_ext_list {
                msg.push_str(ext);
                msg.push(' ');
            }
        }
        msg.push_str(&format!("\nProcessing threads: {}", s.worker_count()));
        info!("{msg}");
    }
}

/// Children of `dir`, sorted by name so traversal order (and with it
/// partition assignment) is reproducible across runs on an unchanged tree.
fn sorted_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("list dir {}", dir.display()))?;
    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        children.push(entry.path());
    }
    children.sort();
    Ok(children)
}
