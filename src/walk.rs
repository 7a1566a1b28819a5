//! Markdown file discovery and totals aggregation.

use anyhow::{Result, bail};
use std::path::Path;
use walkdir::WalkDir;

use crate::rewrite::rewrite_file;

/// Running totals for one full traversal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Summary {
    /// Markdown files visited, including ones with zero fixes.
    pub files: usize,
    /// Links rewritten across all files.
    pub fixed: usize,
}

/// Returns true when the path carries a `.md` extension.
///
/// Extension comparison is case-insensitive so `README.MD` qualifies.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Processes every markdown file under the content root.
///
/// Walks the tree sequentially and rewrites each `.md` file in place.
/// A file that fails to read or write is reported on stderr and
/// skipped; it contributes zero fixes and never aborts the run.
/// Traversal order is not significant.
///
/// # Arguments
///
/// * `root`: Content root directory
///
/// # Returns
///
/// Aggregate file and fix counts for the whole tree
///
/// # Errors
///
/// Returns error if the content root does not exist or is not a
/// directory. Per-file failures are reported and swallowed.
pub fn process_tree(root: &Path) -> Result<Summary> {
    if !root.is_dir() {
        bail!("Content directory not found: {}", root.display());
    }

    let mut summary = Summary::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Error walking {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }

        summary.files += 1;
        match rewrite_file(entry.path(), root) {
            Ok(fixed) => summary.fixed += fixed,
            Err(e) => {
                eprintln!("Error processing {}: {:#}", entry.path().display(), e);
            }
        }
    }

    Ok(summary)
}
