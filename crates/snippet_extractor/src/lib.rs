// crates/snippet_extractor/src/lib.rs

//! Extracts the lines of a file that sit between two anchor lines.
//!
//! An anchor is a token that appears on a line as a whole word, bounded by
//! whitespace or by the start/end of the line. The start and stop anchor
//! lines themselves are never part of the snippet.

pub mod anchor;
pub mod snippet;

pub use anchor::AnchorPattern;
pub use snippet::{extract_snippet, Snippet, SnippetRequest};
