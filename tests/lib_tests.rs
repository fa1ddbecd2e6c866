use rambler::Settings;
use rambler::scan::{accept, extension_of, has_extension};
use rambler::utils::compile_wildcard;
use rambler::utils::fs_ops::path_suffix;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn exts(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// --- extension_of / has_extension ---

#[test]
fn test_extension_of_plain_file() {
    assert_eq!(
        extension_of(Path::new("/a/b/file.txt")),
        Some(".txt".to_string())
    );
}

#[test]
fn test_extension_of_lowercases() {
    assert_eq!(
        extension_of(Path::new("photo.JPG")),
        Some(".jpg".to_string())
    );
}

#[test]
fn test_extension_of_no_extension() {
    assert_eq!(extension_of(Path::new("/a/readme")), None);
    assert!(!has_extension(Path::new("/a/readme")));
}

#[test]
fn test_extension_of_dotfile() {
    assert_eq!(extension_of(Path::new(".gitignore")), None);
    assert!(!has_extension(Path::new(".gitignore")));
}

#[test]
fn test_extension_of_multiple_dots() {
    assert_eq!(
        extension_of(Path::new("archive.tar.gz")),
        Some(".gz".to_string())
    );
}

// --- accept: empty lists, no custom check ---

#[test]
fn test_accept_defaults_any_extension() {
    let settings = Settings::default();
    assert!(accept(&settings, Path::new("a.txt")));
    assert!(accept(&settings, Path::new("b.JPG")));
}

#[test]
fn test_accept_defaults_rejects_extensionless() {
    let settings = Settings::default();
    assert!(!accept(&settings, Path::new("readme")));
    assert!(!accept(&settings, Path::new(".hidden")));
}

// --- accept: allow list ---

#[test]
fn test_accept_allow_list_member() {
    let settings = Settings {
        ext_list: exts(&[".txt", ".md"]),
        ..Settings::default()
    };
    assert!(accept(&settings, Path::new("notes.txt")));
    assert!(accept(&settings, Path::new("notes.TXT")));
    assert!(!accept(&settings, Path::new("photo.jpg")));
}

#[test]
fn test_accept_allow_list_wins_over_custom_check() {
    // A path outside the allow list is never accepted, even if the custom
    // check would say yes.
    let settings = Settings {
        ext_list: exts(&[".txt"]),
        filename_check: Some(Arc::new(|_| true)),
        ..Settings::default()
    };
    assert!(!accept(&settings, Path::new("photo.jpg")));
}

// --- accept: deny list ---

#[test]
fn test_accept_deny_list() {
    let settings = Settings {
        skip_ext_list: exts(&[".tmp"]),
        ..Settings::default()
    };
    assert!(accept(&settings, Path::new("keep.txt")));
    assert!(!accept(&settings, Path::new("scratch.tmp")));
    assert!(!accept(&settings, Path::new("scratch.TMP")));
}

#[test]
fn test_accept_deny_applies_after_allow() {
    let settings = Settings {
        ext_list: exts(&[".txt", ".log"]),
        skip_ext_list: exts(&[".log"]),
        ..Settings::default()
    };
    assert!(accept(&settings, Path::new("a.txt")));
    assert!(!accept(&settings, Path::new("a.log")));
}

// --- accept: custom check ---

#[test]
fn test_accept_custom_check_final_verdict() {
    let settings = Settings {
        filename_check: Some(Arc::new(|p: &Path| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("keep_"))
        })),
        ..Settings::default()
    };
    assert!(accept(&settings, Path::new("keep_this.txt")));
    assert!(!accept(&settings, Path::new("drop_this.txt")));
}

// --- wildcard matcher ---

#[test]
fn test_wildcard_star_and_literal_dot() {
    let m = compile_wildcard("image_*_train.jpg").unwrap();
    assert!(m.is_match("image_001_train.jpg"));
    assert!(m.is_match("image__train.jpg"));
    assert!(!m.is_match("image_001_train.jpeg"));
    assert!(!m.is_match("image_001_trainXjpg"));
}

#[test]
fn test_wildcard_literal_pattern() {
    let m = compile_wildcard("data.csv").unwrap();
    assert!(m.is_match("data.csv"));
    assert!(!m.is_match("dataXcsv"));
    assert!(!m.is_match("old_data.csv"));
}

#[test]
fn test_wildcard_regex_metachars_are_literal() {
    let m = compile_wildcard("a+b(1).txt").unwrap();
    assert!(m.is_match("a+b(1).txt"));
    assert!(!m.is_match("aab(1).txt"));
}

#[test]
fn test_wildcard_filename_check_uses_file_name() {
    let check = compile_wildcard("*.txt").unwrap().into_filename_check();
    assert!(check(Path::new("/some/deep/dir/notes.txt")));
    assert!(!check(Path::new("/some/deep/dir/notes.md")));
}

#[test]
fn test_wildcard_as_settings_check() {
    let settings = Settings {
        filename_check: Some(
            compile_wildcard("image_*_train.jpg")
                .unwrap()
                .into_filename_check(),
        ),
        ..Settings::default()
    };
    assert!(accept(&settings, Path::new("/d/image_001_train.jpg")));
    assert!(!accept(&settings, Path::new("/d/image_001_train.jpeg")));
}

// --- path_suffix ---

#[test]
fn test_path_suffix_under_base() {
    assert_eq!(
        path_suffix(Path::new("/foo/bar/baz/qux.txt"), Path::new("/foo/bar")),
        Some(PathBuf::from("baz/qux.txt"))
    );
}

#[test]
fn test_path_suffix_not_under_base() {
    assert_eq!(
        path_suffix(Path::new("/other/qux.txt"), Path::new("/foo/bar")),
        None
    );
}

// --- Settings ---

#[test]
fn test_worker_count_clamped() {
    let settings = Settings {
        max_threads: 0,
        ..Settings::default()
    };
    assert_eq!(settings.worker_count(), 1);
}

#[test]
fn test_worker_count_passthrough() {
    let settings = Settings {
        max_threads: 4,
        ..Settings::default()
    };
    assert_eq!(settings.worker_count(), 4);
}
