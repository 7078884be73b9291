use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, LevelFilter};

use insert::{run_to_stdout, InsertConfig};
use insert_marker::{PatternMode, DEFAULT_KEYWORD};

const AFTER_HELP: &str = "\
Reads <file> and writes it to stdout with every marker line replaced by a
snippet from another file. A marker line has the form

    <text containing keyword> file: <filename> lines <startID>-<stopID>

and is replaced by the lines of <filename> strictly between the first line
containing <startID> and the next line containing <stopID>. The anchor lines
themselves are not copied. Snippet lines are indented like the marker line.";

fn cli() -> Command {
    Command::new("insert")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fills marker lines in a text file with snippets from other files")
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("file")
                .required(true)
                .value_name("FILE")
                .help("Document to process"),
        )
        .arg(
            Arg::new("keyword")
                .short('k')
                .long("keyword")
                .value_name("WORD")
                .default_value(DEFAULT_KEYWORD)
                .help("Fill lines only if WORD is in the line"),
        )
        .arg(
            Arg::new("fences")
                .long("fences")
                .value_name("FENCE")
                .help("Add fences around the inserted snippets"),
        )
        .arg(
            Arg::new("regex")
                .long("regex")
                .help("Treat the keyword and anchor tokens as regular expressions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug diagnostics on stderr")
                .action(ArgAction::SetTrue),
        )
}

fn config_from_matches(matches: &ArgMatches) -> InsertConfig {
    // Both values are guaranteed by clap: `file` is required, `keyword` has a default.
    let document = matches.get_one::<String>("file").cloned().unwrap_or_default();
    let keyword = matches
        .get_one::<String>("keyword")
        .cloned()
        .unwrap_or_else(|| DEFAULT_KEYWORD.to_string());
    let mode = if matches.get_flag("regex") {
        PatternMode::Regex
    } else {
        PatternMode::Literal
    };

    let mut config = InsertConfig::new(document)
        .with_keyword(keyword)
        .with_pattern_mode(mode)
        .with_verbose(matches.get_flag("verbose"));
    if let Some(fences) = matches.get_one::<String>("fences") {
        config = config.with_fences(fences.clone());
    }
    config
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let config = config_from_matches(&matches);

    init_logging(config.verbose);
    debug!("{:#?}", config);

    run_to_stdout(&config)
}
