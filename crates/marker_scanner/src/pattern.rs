// crates/marker_scanner/src/pattern.rs

use anyhow::{Context, Result};
use insert_marker::{PatternMode, ANCHOR_SEPARATOR, FILE_LITERAL, LINES_LITERAL};
use regex::Regex;

/// Fields captured from a marker line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerLine {
    /// Leading whitespace of the marker line.
    pub indent: String,
    /// Descriptive text before `file:`; always contains the keyword.
    pub text: String,
    pub filename: String,
    pub start_id: String,
    pub stop_id: String,
}

/// The compiled marker grammar for one keyword.
#[derive(Clone, Debug)]
pub struct MarkerPattern {
    regex: Regex,
}

impl MarkerPattern {
    /// Builds the marker grammar around `keyword`.
    ///
    /// `filename` and `startID` are non-greedy, so the first ` lines ` and
    /// the first `-` after it delimit them. A `-` inside a filename or a
    /// start token is therefore read as the anchor separator.
    pub fn new(keyword: &str, mode: PatternMode) -> Result<Self> {
        let source = format!(
            r"^(?P<indent>\s*)(?P<text>.*{keyword}.*)\s+{file}\s+(?P<filename>.+?)\s+{lines}\s+(?P<start>.+?){sep}(?P<stop>.*?)\s*$",
            keyword = mode.fragment(keyword),
            file = regex::escape(FILE_LITERAL),
            lines = regex::escape(LINES_LITERAL),
            sep = regex::escape(ANCHOR_SEPARATOR),
        );
        let regex = Regex::new(&source)
            .with_context(|| format!("Invalid marker keyword '{}'", keyword))?;
        Ok(Self { regex })
    }

    /// Regular expression source, for diagnostics.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Parses `line` (without its terminator) as a marker.
    pub fn parse(&self, line: &str) -> Option<MarkerLine> {
        let caps = self.regex.captures(line)?;
        let field = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };
        Some(MarkerLine {
            indent: field("indent"),
            text: field("text"),
            filename: field("filename"),
            start_id: field("start"),
            stop_id: field("stop"),
        })
    }

    pub fn is_marker(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}
