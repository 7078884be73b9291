// crates/insert/src/lib.rs

//! Replaces marker lines in a document with snippets taken from other files.

pub mod config;
pub mod inserter;
pub mod output;

pub use config::InsertConfig;
pub use inserter::{insert_snippets, Inserter};
pub use output::{run, run_to_stdout, write_lines};
