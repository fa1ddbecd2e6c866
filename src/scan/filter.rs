//! File-filtering policy: extension allow/deny lists plus an optional custom check.

use std::path::Path;

use crate::types::Settings;

/// Lower-cased extension of `path` including the leading dot (`".txt"`),
/// or `None` for extensionless names and dotfiles.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}

/// True if the path carries an extension at all. Drives the file/directory
/// classification in the walker, so it must agree with [`extension_of`].
pub fn has_extension(path: &Path) -> bool {
    path.extension().is_some()
}

/// Decide whether a discovered file should be processed.
///
/// Pure function of the settings and the path:
/// 1. extensionless paths are rejected outright;
/// 2. a non-empty `ext_list` must contain the (lower-cased) extension;
/// 3. a non-empty `skip_ext_list` must not contain it;
/// 4. `filename_check`, when set, gives the final verdict.
pub fn accept(settings: &Settings, path: &Path) -> bool {
    let Some(ext) = extension_of(path) else {
        return false;
    };

    if !settings.ext_list.is_empty() && !settings.ext_list.contains(&ext) {
        return false;
    }

    if !settings.skip_ext_list.is_empty() && settings.skip_ext_list.contains(&ext) {
        return false;
    }

    match &settings.filename_check {
        Some(check) => check(path),
        None => true,
    }
}
