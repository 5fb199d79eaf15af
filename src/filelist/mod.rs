//! File-list manifest building.
//!
//! Walks a directory tree, filters image files by a
//! `<prefix>*<suffix>.<extension>` glob and exclusion substrings, orders them
//! canonically by survey band, derives a source name per file, and produces a
//! JSON manifest consumed by the downstream classification pipeline.

mod rank;

pub use rank::{band_rank, source_name};

use crate::error::FilelistError;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Configuration for one manifest-building run.
#[derive(Debug, Clone)]
pub struct FilelistOptions {
    /// File extension to match (without the leading dot).
    pub file_ext: String,
    /// Directory where the search starts.
    pub root_dir: PathBuf,
    /// Filename prefix filter.
    pub file_prefix: String,
    /// Filename suffix filter (before the extension).
    pub file_subfix: String,
    /// Descend into subdirectories instead of searching only the root.
    pub recursive: bool,
    /// Patterns stripped from the base filename to derive the source name.
    pub sname_strip_patterns: Vec<String>,
    /// A file is dropped when its full path contains any of these.
    pub exclude_patterns: Vec<String>,
    /// Class id assigned to every record (-1 = unknown).
    pub class_id: i64,
    /// Class label assigned to every record.
    pub class_label: String,
    /// Normalizable flag (1/0) assigned to every record.
    pub normalizable_flag: i32,
}

impl Default for FilelistOptions {
    fn default() -> Self {
        Self {
            file_ext: "fits".to_string(),
            root_dir: PathBuf::from("."),
            file_prefix: String::new(),
            file_subfix: String::new(),
            recursive: false,
            sname_strip_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            class_id: -1,
            class_label: "UNKNOWN".to_string(),
            normalizable_flag: 1,
        }
    }
}

/// One matched file in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path of the matched file, wrapped in a single-element list.
    pub filepaths: Vec<String>,
    /// Normalizable flag (1/0), wrapped in a single-element list.
    pub normalizable: Vec<i32>,
    /// Derived source name, used downstream to group multi-band images.
    pub sname: String,
    /// Class id.
    pub id: i64,
    /// Class label.
    pub label: String,
}

/// The JSON manifest: an ordered list of file records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub data: Vec<FileRecord>,
}

impl Manifest {
    /// Serialize the manifest as compact JSON to `path`.
    pub fn write(&self, path: &Path) -> Result<(), FilelistError> {
        let file = File::create(path)?;
        serde_json::to_writer(file, self)?;
        Ok(())
    }
}

/// Split a comma-separated pattern list into its non-empty trimmed entries.
pub fn parse_pattern_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Build the manifest for `opts`.
///
/// Directories are visited top-down; within each directory the matched files
/// are sorted lexicographically, then stably re-sorted by band rank. A
/// nonexistent root yields an empty manifest, not an error.
pub fn build_manifest(opts: &FilelistOptions) -> Result<Manifest, FilelistError> {
    let pattern_str = format!(
        "{}*{}.{}",
        opts.file_prefix, opts.file_subfix, opts.file_ext
    );
    let pattern = Pattern::new(&pattern_str).map_err(|source| FilelistError::InvalidPattern {
        pattern: pattern_str.clone(),
        source,
    })?;
    info!("Searching for files matching pattern {pattern_str} ...");

    let mut manifest = Manifest::default();

    for dir in search_dirs(&opts.root_dir, opts.recursive) {
        let mut files = matching_files(&dir, &pattern, &opts.exclude_patterns);
        if files.is_empty() {
            continue;
        }

        files.sort();
        // Stable: files with equal band rank keep lexicographic order.
        files.sort_by_key(|path| band_rank(&path.to_string_lossy()));
        debug!(dir = %dir.display(), "matched {} files: {files:?}", files.len());

        for path in files {
            let sname = source_name(&path, &opts.sname_strip_patterns);
            info!("sname={sname}");

            manifest.data.push(FileRecord {
                filepaths: vec![path.to_string_lossy().into_owned()],
                normalizable: vec![opts.normalizable_flag],
                sname,
                id: opts.class_id,
                label: opts.class_label.clone(),
            });
        }
    }

    Ok(manifest)
}

/// Directories to search, top-down starting at the root.
fn search_dirs(root: &Path, recursive: bool) -> Vec<PathBuf> {
    if !recursive {
        return vec![root.to_path_buf()];
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect()
}

/// Immediate files of `dir` matching the glob, minus excluded paths.
///
/// An unreadable directory yields no files rather than an error.
fn matching_files(dir: &Path, pattern: &Pattern, exclude_patterns: &[String]) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !pattern.matches(name) {
            continue;
        }

        let full_path = path.to_string_lossy();
        if exclude_patterns
            .iter()
            .any(|pattern| full_path.contains(pattern.as_str()))
        {
            continue;
        }

        files.push(path);
    }
    files
}
