//! Filesystem-wildcard matching: `*` is any substring, everything else literal.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::Arc;

use crate::types::FilenameCheck;

/// A compiled wildcard pattern. Matches the whole input, never a substring.
#[derive(Clone, Debug)]
pub struct Matcher {
    re: Regex,
}

impl Matcher {
    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    /// Adapt this matcher into a [`FilenameCheck`] applied to the file name
    /// component of each candidate path. Paths without a representable file
    /// name are rejected.
    pub fn into_filename_check(self) -> FilenameCheck {
        Arc::new(move |path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| self.is_match(name))
        })
    }
}

/// Compile a wildcard such as `image_*_train.jpg` into a [`Matcher`].
///
/// `*` matches any substring (including the empty one); every other
/// character, `.` included, matches only itself. Compilation failures are
/// reported here, never deferred to scan time.
pub fn compile_wildcard(pattern: &str) -> Result<Matcher> {
    let mut re = String::with_capacity(pattern.len() + 2);
    re.push('^');
    for ch in pattern.chars() {
        if ch == '*' {
            re.push_str(".*");
        } else {
            re.push_str(&regex::escape(&ch.to_string()));
        }
    }
    re.push('$');

    let re = Regex::new(&re).with_context(|| format!("compile wildcard {pattern:?}"))?;
    Ok(Matcher { re })
}
