// crates/insert/src/inserter.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Result;
use log::debug;
use marker_scanner::{scan_markers, MarkerLine, MarkerPattern, MarkerScanner, ScannedLine};
use snippet_extractor::{extract_snippet, Snippet, SnippetRequest};

use crate::config::InsertConfig;

enum InsertState {
    Scanning,
    /// Opening fence emitted; the snippet source is not open yet.
    Opening(MarkerLine),
    Emitting {
        snippet: Snippet<BufReader<File>>,
        closing_fence: Option<String>,
    },
}

/// Output lines of a document with every marker replaced by its snippet.
///
/// Composes a [`MarkerScanner`] with one [`Snippet`] per marker. Each marker
/// opens its source file anew, and the file is released as soon as the
/// snippet is exhausted. Yielded lines carry no line terminator.
pub struct Inserter<R> {
    scanner: MarkerScanner<R>,
    config: InsertConfig,
    state: InsertState,
}

impl<R: BufRead> Inserter<R> {
    pub fn new(scanner: MarkerScanner<R>, config: InsertConfig) -> Self {
        Self {
            scanner,
            config,
            state: InsertState::Scanning,
        }
    }

    fn fence_line(&self, marker: &MarkerLine) -> Option<String> {
        self.config
            .fences
            .as_ref()
            .map(|fence| format!("{}{}", fence, marker.indent))
    }

    fn open_snippet(&self, marker: &MarkerLine) -> Result<Snippet<BufReader<File>>> {
        if self.config.verbose {
            debug!("filling snippet {}", marker.text);
        }
        extract_snippet(&SnippetRequest {
            filename: Path::new(&marker.filename),
            start_id: &marker.start_id,
            stop_id: &marker.stop_id,
            indent: &marker.indent,
            mode: self.config.pattern_mode,
            verbose: self.config.verbose,
        })
    }
}

impl<R: BufRead> Iterator for Inserter<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, InsertState::Scanning) {
                InsertState::Scanning => match self.scanner.next()? {
                    Err(err) => return Some(Err(err)),
                    Ok(ScannedLine::Text(line)) => return Some(Ok(line)),
                    Ok(ScannedLine::Marker(marker)) => {
                        let fence = self.fence_line(&marker);
                        self.state = InsertState::Opening(marker);
                        if let Some(fence) = fence {
                            return Some(Ok(fence));
                        }
                    }
                },
                InsertState::Opening(marker) => {
                    let snippet = match self.open_snippet(&marker) {
                        Ok(snippet) => snippet,
                        Err(err) => return Some(Err(err)),
                    };
                    self.state = InsertState::Emitting {
                        snippet,
                        closing_fence: self.fence_line(&marker),
                    };
                }
                InsertState::Emitting {
                    mut snippet,
                    closing_fence,
                } => match snippet.next() {
                    Some(item) => {
                        self.state = InsertState::Emitting {
                            snippet,
                            closing_fence,
                        };
                        return Some(item);
                    }
                    None => {
                        if let Some(fence) = closing_fence {
                            return Some(Ok(fence));
                        }
                    }
                },
            }
        }
    }
}

/// Opens `config.document` and returns its lines with markers expanded.
///
/// # Errors
///
/// Returns an error if the keyword does not form a valid pattern or the
/// document cannot be opened. Later failures (a missing snippet source,
/// unreadable input) are yielded as `Err` items.
pub fn insert_snippets(config: &InsertConfig) -> Result<Inserter<BufReader<File>>> {
    let pattern = MarkerPattern::new(&config.keyword, config.pattern_mode)?;
    let scanner = scan_markers(&config.document, pattern, config.verbose)?;
    Ok(Inserter::new(scanner, config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insert_marker::PatternMode;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn inserter(document: &str, config: InsertConfig) -> Inserter<Cursor<String>> {
        let pattern = MarkerPattern::new(&config.keyword, config.pattern_mode).unwrap();
        let scanner = MarkerScanner::new(Cursor::new(document.to_string()), pattern, false);
        Inserter::new(scanner, config)
    }

    fn source(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_inserts_snippet_in_place_of_marker() {
        let dir = TempDir::new().unwrap();
        let src = source(&dir, "S", "p\nfoo\nq\nr\nbar\ns\n");
        let document = format!("A\nX MISSING file: {} lines foo-bar\nB\n", src);
        let lines: Vec<String> = inserter(&document, InsertConfig::new("unused"))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["A", "q", "r", "B"]);
    }

    #[test]
    fn test_fences_wrap_snippet_with_indent() {
        let dir = TempDir::new().unwrap();
        let src = source(&dir, "S", "foo\nq\nbar\n");
        let document = format!("  MISSING file: {} lines foo-bar\n", src);
        let config = InsertConfig::new("unused").with_fences("***");
        let lines: Vec<String> = inserter(&document, config).collect::<Result<_>>().unwrap();
        assert_eq!(lines, vec!["***  ", "  q", "***  "]);
    }

    #[test]
    fn test_fences_around_empty_snippet() {
        let dir = TempDir::new().unwrap();
        let src = source(&dir, "S", "nothing here\n");
        let document = format!("MISSING file: {} lines foo-bar\n", src);
        let config = InsertConfig::new("unused").with_fences("---");
        let lines: Vec<String> = inserter(&document, config).collect::<Result<_>>().unwrap();
        assert_eq!(lines, vec!["---", "---"]);
    }

    #[test]
    fn test_same_source_used_twice() {
        let dir = TempDir::new().unwrap();
        let src = source(&dir, "S", "a\nb\nc\nd\n");
        let document = format!(
            "MISSING file: {src} lines a-c\nmid\nMISSING file: {src} lines b-d\n",
            src = src
        );
        let lines: Vec<String> = inserter(&document, InsertConfig::new("unused"))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["b", "mid", "c"]);
    }

    #[test]
    fn test_missing_source_is_error_after_opening_fence() {
        let document = "before\nMISSING file: no_such_snippet_source.txt lines a-b\nafter\n";
        let config = InsertConfig::new("unused").with_fences("```");
        let mut lines = inserter(document, config);
        assert_eq!(lines.next().unwrap().unwrap(), "before");
        assert_eq!(lines.next().unwrap().unwrap(), "```");
        let err = lines.next().unwrap().unwrap_err();
        assert!(err.to_string().contains("no_such_snippet_source.txt"));
    }

    #[test]
    fn test_regex_mode_anchor_tokens() {
        let dir = TempDir::new().unwrap();
        let src = source(&dir, "S", "# v1\nkeep\n# v2\n");
        let document = format!(r"MISSING file: {} lines v1-v\d", src);
        let config = InsertConfig::new("unused").with_pattern_mode(PatternMode::Regex);
        let lines: Vec<String> = inserter(&document, config).collect::<Result<_>>().unwrap();
        assert_eq!(lines, vec!["keep"]);
    }

    #[test]
    fn test_empty_stop_id_stops_at_whitespace_boundary() {
        let dir = TempDir::new().unwrap();
        let src = source(&dir, "S", "foo\na\nc \nb\n");
        let document = format!("MISSING file: {} lines foo-", src);
        let lines: Vec<String> = inserter(&document, InsertConfig::new("unused"))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["a"]);
    }

    #[test]
    fn test_insert_snippets_missing_document() {
        let config = InsertConfig::new("non_existent_document.md");
        assert!(insert_snippets(&config).is_err());
    }

    #[test]
    fn test_insert_snippets_invalid_keyword() {
        let dir = TempDir::new().unwrap();
        let doc = source(&dir, "doc.md", "text\n");
        let config = InsertConfig::new(doc)
            .with_keyword("[")
            .with_pattern_mode(PatternMode::Regex);
        assert!(insert_snippets(&config).is_err());
    }
}
