// crates/snippet_extractor/src/anchor.rs

use anyhow::{Context, Result};
use insert_marker::PatternMode;
use regex::Regex;

/// A compiled anchor token.
///
/// Matches a line containing the token preceded by whitespace or the start of
/// the line and followed by whitespace or the end of the line.
/// An empty token matches empty lines and any line holding a whitespace
/// character at its start, at its end, or next to another one.
#[derive(Clone, Debug)]
pub struct AnchorPattern {
    token: String,
    regex: Regex,
}

impl AnchorPattern {
    pub fn new(token: &str, mode: PatternMode) -> Result<Self> {
        let source = format!(r"(?:^|\s){}(?:\s|$)", mode.fragment(token));
        let regex = Regex::new(&source)
            .with_context(|| format!("Invalid anchor pattern '{}'", token))?;
        Ok(Self {
            token: token.to_string(),
            regex,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}
