//! Single-file markdown link rewriting.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::links::{LinkKind, relative_url, source_depth};

/// Matches inline markdown links: `[display text](url)`.
///
/// Reference-style links, autolinks, and HTML anchors are deliberately
/// not matched; they pass through untouched. URL scheme casing is
/// handled during classification, not here.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid")
});

/// Rewrites absolute internal links in markdown text.
///
/// Runs a single pattern pass over `content`. Absolute internal link
/// URLs are replaced with their relative equivalent for a file at the
/// given depth, keeping the display text. External and already
/// relative links are copied verbatim. Prints a notice for every
/// replacement.
///
/// # Arguments
///
/// * `content`: Full markdown text of one file
/// * `depth`: Source file depth from [`source_depth`]
///
/// # Returns
///
/// Rewritten text and the number of replacements made
pub fn rewrite_content(content: &str, depth: usize) -> (String, usize) {
    let mut fixed = 0;

    let updated = LINK_PATTERN.replace_all(content, |caps: &Captures<'_>| {
        let text = &caps[1];
        let url = &caps[2];

        match LinkKind::classify(url) {
            LinkKind::External | LinkKind::Relative => caps[0].to_string(),
            LinkKind::AbsoluteInternal => {
                let relative = relative_url(depth, url);
                fixed += 1;
                println!("  Fixed: {} -> {}", url, relative);
                format!("[{}]({})", text, relative)
            }
        }
    });

    (updated.into_owned(), fixed)
}

/// Rewrites absolute internal links in one markdown file, in place.
///
/// The file is overwritten only when at least one link changed, so
/// untouched files keep their exact bytes and modification time.
///
/// # Arguments
///
/// * `path`: Markdown file to process
/// * `root`: Content root directory containing the file
///
/// # Returns
///
/// Number of links rewritten in this file
///
/// # Errors
///
/// Returns error if the file cannot be read as UTF-8, lies outside the
/// content root, or cannot be written back.
pub fn rewrite_file(path: &Path, root: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let depth = source_depth(path, root)?;
    let (updated, fixed) = rewrite_content(&content, depth);

    if fixed > 0 {
        fs::write(path, &updated)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Fixed {} links in {}", fixed, path.display());
    }

    Ok(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_absolute_link_at_root() {
        // Arrange
        let content = "See [guide](/docs/guide) for details.";

        // Act
        let (updated, fixed) = rewrite_content(content, 0);

        // Assert
        assert_eq!(updated, "See [guide](docs/guide) for details.");
        assert_eq!(fixed, 1);
    }

    #[test]
    fn test_rewrite_absolute_link_nested() {
        // Arrange
        let content = "[x](/a/b)";

        // Act
        let (updated, fixed) = rewrite_content(content, 2);

        // Assert
        assert_eq!(updated, "[x](../../a/b)");
        assert_eq!(fixed, 1);
    }

    #[test]
    fn test_mixed_links_only_absolute_rewritten() {
        // Arrange
        let content = "[a](/x) [b](http://ext.com) [c](./y) [d](#anchor)";

        // Act
        let (updated, fixed) = rewrite_content(content, 1);

        // Assert
        assert_eq!(updated, "[a](../x) [b](http://ext.com) [c](./y) [d](#anchor)");
        assert_eq!(fixed, 1, "Only the absolute internal link should count");
    }

    #[test]
    fn test_external_links_byte_identical() {
        // Arrange
        let content = "[site](https://example.com/Page?q=1) [mail](mailto:a@b.c)";

        // Act
        let (updated, fixed) = rewrite_content(content, 3);

        // Assert
        assert_eq!(updated, content);
        assert_eq!(fixed, 0);
    }

    #[test]
    fn test_relative_links_unchanged() {
        // Arrange
        let content = "[up](../other.md) [here](./local.md) [bare](sibling.md)";

        // Act
        let (updated, fixed) = rewrite_content(content, 2);

        // Assert
        assert_eq!(updated, content);
        assert_eq!(fixed, 0);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        // Arrange
        let content = "[a](/x/y) and [b](/z)";

        // Act
        let (first, first_fixed) = rewrite_content(content, 1);
        let (second, second_fixed) = rewrite_content(&first, 1);

        // Assert
        assert_eq!(first_fixed, 2);
        assert_eq!(second, first, "Second pass should change nothing");
        assert_eq!(second_fixed, 0);
    }

    #[test]
    fn test_multiple_links_one_line() {
        // Arrange
        let content = "[a](/one) then [b](/two)";

        // Act
        let (updated, fixed) = rewrite_content(content, 0);

        // Assert
        assert_eq!(updated, "[a](one) then [b](two)");
        assert_eq!(fixed, 2);
    }

    #[test]
    fn test_non_link_brackets_untouched() {
        // Arrange
        let content = "array[0] and (parens) and [ref][style]";

        // Act
        let (updated, fixed) = rewrite_content(content, 1);

        // Assert
        assert_eq!(updated, content);
        assert_eq!(fixed, 0);
    }
}
