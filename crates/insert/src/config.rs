// crates/insert/src/config.rs

use std::path::PathBuf;

use insert_marker::{PatternMode, DEFAULT_KEYWORD};

/// Resolved runtime configuration for one run.
#[derive(Clone, Debug)]
pub struct InsertConfig {
    /// Document to process.
    pub document: PathBuf,
    /// Lines must contain this keyword to be treated as markers.
    pub keyword: String,
    /// Emitted, followed by the marker's indent, before and after each snippet.
    pub fences: Option<String>,
    pub pattern_mode: PatternMode,
    pub verbose: bool,
}

impl InsertConfig {
    pub fn new<P: Into<PathBuf>>(document: P) -> Self {
        Self {
            document: document.into(),
            keyword: DEFAULT_KEYWORD.to_string(),
            fences: None,
            pattern_mode: PatternMode::Literal,
            verbose: false,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn with_fences(mut self, fences: impl Into<String>) -> Self {
        self.fences = Some(fences.into());
        self
    }

    pub fn with_pattern_mode(mut self, mode: PatternMode) -> Self {
        self.pattern_mode = mode;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
