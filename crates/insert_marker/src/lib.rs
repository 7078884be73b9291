// crates/insert_marker/src/lib.rs

//! Shared marker vocabulary for the insert tool‑chain.

use std::borrow::Cow;

/// Keyword a line must contain to be treated as a marker when none is given.
pub const DEFAULT_KEYWORD: &str = "MISSING";

/// Literal that introduces the snippet source filename on a marker line.
pub const FILE_LITERAL: &str = "file:";

/// Literal that introduces the `<start>-<stop>` anchor pair on a marker line.
pub const LINES_LITERAL: &str = "lines";

/// Separator between the start and stop anchor tokens.
pub const ANCHOR_SEPARATOR: &str = "-";

/// How user supplied tokens (the keyword and the anchor tokens) are spliced
/// into the regular expressions built from them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternMode {
    /// Tokens match their literal text.
    #[default]
    Literal,
    /// Tokens are regular expression syntax.
    Regex,
}

impl PatternMode {
    /// Returns the pattern source for `token`. Literal tokens are escaped;
    /// regex tokens are wrapped in a non-capturing group so they can be
    /// embedded anywhere in a larger expression.
    pub fn fragment<'a>(&self, token: &'a str) -> Cow<'a, str> {
        match self {
            PatternMode::Literal => {
                let escaped = regex::escape(token);
                if escaped == token {
                    Cow::Borrowed(token)
                } else {
                    Cow::Owned(escaped)
                }
            }
            PatternMode::Regex => Cow::Owned(format!("(?:{})", token)),
        }
    }
}
