// crates/snippet_extractor/src/snippet.rs

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use anyhow::{Context, Result};
use insert_marker::PatternMode;
use log::debug;

use crate::anchor::AnchorPattern;

/// Everything needed to pull one snippet out of a source file.
#[derive(Clone, Debug)]
pub struct SnippetRequest<'a> {
    pub filename: &'a Path,
    pub start_id: &'a str,
    pub stop_id: &'a str,
    /// Prefix added to every yielded line.
    pub indent: &'a str,
    pub mode: PatternMode,
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SnippetState {
    SeekingStart,
    Emitting,
    Finished,
}

/// Lazy, forward-only sequence of the lines between a start anchor line and
/// a stop anchor line (both exclusive).
///
/// Lines are yielded without their line terminator and prefixed with the
/// indent. A missing start anchor yields nothing; a missing stop anchor
/// yields through end of input. Neither is an error.
pub struct Snippet<R> {
    lines: Lines<R>,
    start: AnchorPattern,
    stop: AnchorPattern,
    indent: String,
    state: SnippetState,
    source: String,
    verbose: bool,
}

impl<R: BufRead> Snippet<R> {
    pub fn new(reader: R, start: AnchorPattern, stop: AnchorPattern, indent: &str) -> Self {
        Self {
            lines: reader.lines(),
            start,
            stop,
            indent: indent.to_string(),
            state: SnippetState::SeekingStart,
            source: "<reader>".to_string(),
            verbose: false,
        }
    }

    fn finish(&mut self) {
        if self.verbose && self.state == SnippetState::SeekingStart {
            debug!(
                "start anchor '{}' not found in {}",
                self.start.token(),
                self.source
            );
        }
        self.state = SnippetState::Finished;
    }
}

impl<R: BufRead> Iterator for Snippet<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.state == SnippetState::Finished {
                return None;
            }
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => {
                    self.state = SnippetState::Finished;
                    let err = anyhow::Error::new(err)
                        .context(format!("Error reading file {}", self.source));
                    return Some(Err(err));
                }
                None => {
                    self.finish();
                    return None;
                }
            };

            match self.state {
                SnippetState::SeekingStart => {
                    if self.start.is_match(&line) {
                        self.state = SnippetState::Emitting;
                    }
                }
                SnippetState::Emitting => {
                    if self.stop.is_match(&line) {
                        self.state = SnippetState::Finished;
                        return None;
                    }
                    return Some(Ok(format!("{}{}", self.indent, line)));
                }
                SnippetState::Finished => return None,
            }
        }
    }
}

/// Opens `request.filename` and returns the snippet between its anchors.
///
/// # Errors
///
/// Returns an error if an anchor does not compile or the file cannot be
/// opened. Read failures surface later as `Err` items of the iterator.
pub fn extract_snippet(request: &SnippetRequest<'_>) -> Result<Snippet<BufReader<File>>> {
    let start = AnchorPattern::new(request.start_id, request.mode)?;
    let stop = AnchorPattern::new(request.stop_id, request.mode)?;
    let file = File::open(request.filename)
        .with_context(|| format!("Error opening file {}", request.filename.display()))?;

    let mut snippet = Snippet::new(BufReader::new(file), start, stop, request.indent);
    snippet.source = request.filename.display().to_string();
    snippet.verbose = request.verbose;
    Ok(snippet)
}
