use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;

use rambler::Settings;
use rambler::utils::compile_wildcard;

/// Directory tree scanner with a fixed worker pool.
#[derive(Clone, Parser)]
#[command(name = "rambler")]
#[command(about = "Scan a directory tree and run an action on every matched file.")]
pub struct Cli {
    /// Directory to scan. Default: current directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Allowed file extensions (e.g. `.txt`); case-insensitive. Can specify
    /// multiple: -e .txt .jpg
    #[arg(long = "ext", short = 'e', num_args = 1..)]
    pub ext: Vec<String>,

    /// Forbidden file extensions; case-insensitive. Can specify multiple.
    #[arg(long = "skip-ext", num_args = 1..)]
    pub skip_ext: Vec<String>,

    /// Descend into subdirectories.
    #[arg(long, short = 's')]
    pub subdirs: bool,

    /// Maximum subdirectory depth; 0 means unlimited. Implies --subdirs when set.
    #[arg(long, short = 'd', default_value_t = 0)]
    pub depth: usize,

    /// Worker thread count; 0 picks one per available core.
    #[arg(long, short = 't', default_value_t = 8)]
    pub threads: usize,

    /// File-name wildcard applied to matched files (e.g. 'image_*_train.jpg').
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Copy matched files here, preserving their path relative to DIR.
    #[arg(long)]
    pub copy_to: Option<PathBuf>,

    /// Verbose output (per-worker debug lines).
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Only report errors.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Info
        }
    }

    /// Build scan settings from the parsed arguments. Wildcard compilation
    /// happens here, so a bad pattern fails before the scan starts.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let filename_check = match &self.name {
            Some(pattern) => Some(compile_wildcard(pattern)?.into_filename_check()),
            None => None,
        };
        Ok(Settings {
            check_subdirs: self.subdirs || self.depth > 0,
            max_subdir_depth: self.depth,
            ext_list: normalize_exts(&self.ext),
            skip_ext_list: normalize_exts(&self.skip_ext),
            max_threads: match self.threads {
                0 => rayon::current_num_threads(),
                n => n,
            },
            filename_check,
        })
    }
}

/// Lower-case the given extensions and make sure each carries a leading dot.
fn normalize_exts(exts: &[String]) -> BTreeSet<String> {
    exts.iter()
        .map(|e| {
            let e = e.to_lowercase();
            if e.starts_with('.') {
                e
            } else {
                format!(".{e}")
            }
        })
        .collect()
}
