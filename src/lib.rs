//! Rewrites absolute internal markdown links as relative links.
//!
//! Walks a documentation tree, finds inline links of the form
//! `[text](/path)`, and rewrites each URL relative to the linking
//! file's depth below the content root. External links, anchors, and
//! already relative links pass through untouched.

mod config;
mod links;
mod rewrite;
mod walk;

pub use config::Config;
pub use links::{LinkKind, relative_url, source_depth};
pub use rewrite::{rewrite_content, rewrite_file};
pub use walk::{Summary, is_markdown, process_tree};
