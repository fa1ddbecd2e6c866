//! Public types for the rambler API.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Extra per-file check applied after the extension lists pass.
/// Receives the full path; returns the final accept verdict.
pub type FilenameCheck = Arc<dyn Fn(&Path) -> bool + Send + Sync>;

/// Coordination handle shared by the dispatcher and every worker for one scan.
///
/// The core only takes it around its own log lines. The same handle is passed
/// to every processing-function call in both single- and multi-worker mode
/// (in single-worker mode it is simply never contended), so a processing
/// function may rely on it for its own serialization if it chooses to.
pub type ProgressLock = Mutex<()>;

/// Immutable configuration for one scan. Built once, read-only thereafter.
#[derive(Clone)]
pub struct Settings {
    /// Descend into extensionless subdirectories of the root.
    pub check_subdirs: bool,
    /// Maximum subdirectory depth to descend into; 0 means unlimited.
    pub max_subdir_depth: usize,
    /// Lower-case extensions (with leading dot, e.g. `".txt"`) to process.
    /// Empty means every extension is allowed.
    pub ext_list: BTreeSet<String>,
    /// Lower-case extensions to skip. Empty means nothing is denied.
    pub skip_ext_list: BTreeSet<String>,
    /// Number of worker threads / partitions. Clamped to at least 1.
    pub max_threads: usize,
    /// Optional per-file check, consulted last.
    pub filename_check: Option<FilenameCheck>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            check_subdirs: false,
            max_subdir_depth: 0,
            ext_list: BTreeSet::new(),
            skip_ext_list: BTreeSet::new(),
            max_threads: 8,
            filename_check: None,
        }
    }
}

impl Settings {
    /// Worker/partition count actually used: `max_threads`, but never 0.
    pub fn worker_count(&self) -> usize {
        self.max_threads.max(1)
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("check_subdirs", &self.check_subdirs)
            .field("max_subdir_depth", &self.max_subdir_depth)
            .field("ext_list", &self.ext_list)
            .field("skip_ext_list", &self.skip_ext_list)
            .field("max_threads", &self.max_threads)
            .field(
                "filename_check",
                &self.filename_check.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

/// Aggregate statistics for one completed scan.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// Files accepted by the filter and handed to a worker.
    pub files_processed: usize,
    /// Extensioned files the filter rejected.
    pub files_skipped: usize,
    /// Subdirectories entered during traversal (the root is not counted).
    pub dirs_visited: usize,
    /// Wall-clock duration of the whole scan.
    pub elapsed: Duration,
}
