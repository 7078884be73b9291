// crates/insert/src/output.rs

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::config::InsertConfig;
use crate::inserter::insert_snippets;

/// Writes each line followed by exactly one `\n`, stripping any trailing
/// newlines the line already carries. Stops at the first `Err` item.
pub fn write_lines<W, I>(writer: &mut W, lines: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Result<String>>,
{
    for line in lines {
        let line = line?;
        writeln!(writer, "{}", line.trim_end_matches('\n')).context("Error writing output")?;
    }
    writer.flush().context("Error writing output")?;
    Ok(())
}

/// Expands `config.document` into `writer`.
pub fn run<W: Write>(config: &InsertConfig, writer: &mut W) -> Result<()> {
    let lines = insert_snippets(config)?;
    write_lines(writer, lines)
}

/// Expands `config.document` to standard output.
pub fn run_to_stdout(config: &InsertConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(config, &mut handle)
}
