// crates/marker_scanner/src/lib.rs

//! Finds marker lines of the form
//!
//! ```text
//! <indent><text containing keyword> file: <filename> lines <startID>-<stopID>
//! ```
//!
//! and passes every other line through untouched.

pub mod pattern;
pub mod scanner;

pub use pattern::{MarkerLine, MarkerPattern};
pub use scanner::{scan_markers, MarkerScanner, ScannedLine};
