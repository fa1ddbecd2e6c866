//! Filesystem shims used around a scan: copy, create, remove, path suffix.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy a single file, returning the number of bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    fs::copy(src, dst).with_context(|| format!("copy {} to {}", src.display(), dst.display()))
}

/// Copy a directory's files into `dst`, creating it first. With `recursive`,
/// subdirectories are copied too; without, they are skipped.
pub fn copy_dir(src: &Path, dst: &Path, recursive: bool) -> Result<()> {
    create_dir(dst)?;
    let entries =
        fs::read_dir(src).with_context(|| format!("list dir {}", src.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", src.display()))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            if recursive {
                copy_dir(&from, &to, true)?;
            }
        } else {
            copy_file(&from, &to)?;
        }
    }
    Ok(())
}

/// Create a directory and any missing parents.
pub fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("create dir {}", path.display()))
}

pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("remove file {}", path.display()))
}

/// Remove a directory and everything under it.
pub fn remove_dir(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).with_context(|| format!("remove dir {}", path.display()))
}

/// The part of `path` below `base`, or `None` when `path` is not under it.
pub fn path_suffix(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}
