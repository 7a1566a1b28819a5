//! Link classification and relative path calculation.

use anyhow::{Context, Result};
use std::path::Path;

/// Classification of a markdown link URL.
///
/// Variants are mutually exclusive and checked in priority order:
/// external schemes first, then anything not rooted at `/`, then
/// absolute internal paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// URL with an external scheme (`http://`, `https://`, `mailto:`)
    /// or a bare anchor (`#section`). Never rewritten.
    External,
    /// URL already expressed relative to the referencing file. Never
    /// rewritten.
    Relative,
    /// URL starting with `/`, interpreted against the content root.
    /// The only kind that gets rewritten.
    AbsoluteInternal,
}

impl LinkKind {
    /// Classifies a link URL.
    ///
    /// Scheme matching is case-insensitive (`HTTP://` counts as
    /// external).
    ///
    /// # Arguments
    ///
    /// * `url`: Link href as it appears in the markdown source
    pub fn classify(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://")
            || lower.starts_with("https://")
            || lower.starts_with("mailto:")
            || lower.starts_with('#')
        {
            LinkKind::External
        } else if !url.starts_with('/') {
            LinkKind::Relative
        } else {
            LinkKind::AbsoluteInternal
        }
    }
}

/// Calculates how many levels below the content root a file sits.
///
/// A file directly in the content root has depth 0; a file at
/// `<root>/sub/dir/page.md` has depth 2.
///
/// # Arguments
///
/// * `file`: Path to the markdown file being processed
/// * `root`: Content root directory
///
/// # Errors
///
/// Returns error if `file` is not located under `root`.
pub fn source_depth(file: &Path, root: &Path) -> Result<usize> {
    let dir = file.parent().unwrap_or_else(|| Path::new(""));
    let relative = dir
        .strip_prefix(root)
        .with_context(|| format!("File is outside content root: {}", file.display()))?;
    Ok(relative.components().count())
}

/// Builds the relative equivalent of an absolute internal link target.
///
/// Strips the leading `/` from the target and prepends one `../` per
/// level of source depth. Only the source file's depth is consulted;
/// the target is taken verbatim as a root-relative path. Targets not
/// expressed relative to the content root are not reconciled further.
///
/// # Arguments
///
/// * `depth`: Source file depth from [`source_depth`]
/// * `target`: Link URL starting with `/`
pub fn relative_url(depth: usize, target: &str) -> String {
    let stripped = target.trim_start_matches('/');
    if depth == 0 {
        stripped.to_string()
    } else {
        format!("{}{}", "../".repeat(depth), stripped)
    }
}
