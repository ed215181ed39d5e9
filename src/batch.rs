use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

// @module: TTML document discovery and output name assignment

/// File extension of eligible markup documents
pub const TTML_EXTENSION: &str = "ttml";

// @const: Identifier regex - marker token followed by a captured segment
// running up to the next path separator
static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"PodcastContent([^/\\]+)").unwrap()
});

/// A discovered input document together with the identifier derived
/// from its path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    // @field: Full path of the source document
    pub path: PathBuf,

    // @field: Identifier captured from the path
    pub identifier: String,
}

/// Extract the document identifier from a path string.
///
/// Pure string matching, independent of the filesystem: the segment
/// following the `PodcastContent` marker, up to the next path separator.
/// Paths without the marker yield `None`.
pub fn identifier_from_path(path: &str) -> Option<String> {
    IDENTIFIER_REGEX
        .captures(path)
        .map(|caps| caps[1].to_string())
}

/// Recursively discover eligible TTML documents under a root directory.
///
/// Directory entries are visited in file-name order so the result, and
/// therefore output naming, is deterministic across runs and platforms.
/// Files whose path carries no identifier are silently excluded.
pub fn collect_documents<P: AsRef<Path>>(root: P) -> Result<Vec<BatchEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension() else {
            continue;
        };
        if !ext.to_string_lossy().eq_ignore_ascii_case(TTML_EXTENSION) {
            continue;
        }

        match identifier_from_path(&path.to_string_lossy()) {
            Some(identifier) => entries.push(BatchEntry {
                path: path.to_path_buf(),
                identifier,
            }),
            None => debug!("Skipping {} (no identifier in path)", path.display()),
        }
    }

    Ok(entries)
}

/// Assign deduplicated output filenames to discovered entries, aligned
/// by index with the input slice.
///
/// The first occurrence of an identifier maps to `<identifier>.txt`, the
/// Nth subsequent one to `<identifier>-N.txt`. The occurrence table is
/// local to this call so independent batch runs cannot influence each
/// other.
pub fn assign_output_names(entries: &[BatchEntry]) -> Vec<String> {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();

    entries
        .iter()
        .map(|entry| {
            let count = occurrences.entry(entry.identifier.as_str()).or_insert(0);
            let name = if *count == 0 {
                format!("{}.txt", entry.identifier)
            } else {
                format!("{}-{}.txt", entry.identifier, count)
            };
            *count += 1;
            name
        })
        .collect()
}
