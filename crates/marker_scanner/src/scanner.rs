// crates/marker_scanner/src/scanner.rs

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::pattern::{MarkerLine, MarkerPattern};

/// One line of the scanned document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScannedLine {
    /// Ordinary content, without its line terminator.
    Text(String),
    Marker(MarkerLine),
}

/// Pull-based scanner over a document's lines.
pub struct MarkerScanner<R> {
    lines: Lines<R>,
    pattern: MarkerPattern,
    source: String,
    verbose: bool,
    done: bool,
}

impl<R: BufRead> MarkerScanner<R> {
    pub fn new(reader: R, pattern: MarkerPattern, verbose: bool) -> Self {
        Self {
            lines: reader.lines(),
            pattern,
            source: "<reader>".to_string(),
            verbose,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for MarkerScanner<R> {
    type Item = Result<ScannedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let line = match self.lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                self.done = true;
                let err = anyhow::Error::new(err)
                    .context(format!("Error reading file {}", self.source));
                return Some(Err(err));
            }
            None => {
                self.done = true;
                return None;
            }
        };

        match self.pattern.parse(&line) {
            Some(marker) => {
                if self.verbose {
                    debug!("Line: {}", line.trim_end());
                    debug!("{:#?}", marker);
                }
                Some(Ok(ScannedLine::Marker(marker)))
            }
            None => Some(Ok(ScannedLine::Text(line))),
        }
    }
}

/// Opens the document at `path` and scans it for markers.
///
/// # Errors
///
/// Returns an error if the document cannot be opened.
pub fn scan_markers<P: AsRef<Path>>(
    path: P,
    pattern: MarkerPattern,
    verbose: bool,
) -> Result<MarkerScanner<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Error opening file {}", path.display()))?;
    if verbose {
        debug!("looking for {:?}", pattern.as_str());
    }
    let mut scanner = MarkerScanner::new(BufReader::new(file), pattern, verbose);
    scanner.source = path.display().to_string();
    Ok(scanner)
}
