// wordrank-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordrank_suggest::{ChainedSuggester, CorpusOptions, FrequencySuggester};

/// Corpus file name looked up in the default locations.
const CORPUS_FILE: &str = "frequencies.txt";

/// Environment variable naming a corpus file or a directory containing one.
const CORPUS_PATH_ENV: &str = "WORDRANK_CORPUS_PATH";

/// Environment variable holding the log filter (e.g. `info`, `wordrank_suggest=debug`).
const LOG_ENV: &str = "WORDRANK_LOG";

/// Install a stderr log subscriber filtered by `WORDRANK_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the corpora and chain them in the order given.
///
/// With no explicit paths, the first corpus found in the default search
/// paths is used:
/// 1. `WORDRANK_CORPUS_PATH` (file, or directory containing `frequencies.txt`)
/// 2. `~/.wordrank/frequencies.txt`
/// 3. `/usr/share/wordrank/frequencies.txt`
/// 4. `./frequencies.txt`
pub fn load_suggester(
    corpus_paths: &[String],
    options: &CorpusOptions,
) -> Result<ChainedSuggester, String> {
    let paths = if corpus_paths.is_empty() {
        vec![find_default_corpus()?]
    } else {
        corpus_paths.iter().map(PathBuf::from).collect()
    };

    let mut chain = ChainedSuggester::default();
    for path in &paths {
        let suggester =
            FrequencySuggester::from_path_with_options(path, options).map_err(|e| e.to_string())?;
        let report = suggester.report();
        if !report.is_clean() {
            info!(
                path = %path.display(),
                skipped = report.skipped.len(),
                "corpus contained malformed lines"
            );
        }
        chain.push(suggester);
    }
    Ok(chain)
}

/// Return the first existing corpus in the default search paths.
fn find_default_corpus() -> Result<PathBuf, String> {
    let search_paths = build_search_paths();
    search_paths
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| {
            format!(
                "could not find {} in any of the search paths:\n{}",
                CORPUS_FILE,
                search_paths
                    .iter()
                    .map(|p| format!("  - {}", p.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        })
}

/// Build the list of candidate corpus files.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(CORPUS_PATH_ENV) {
        let env_path = PathBuf::from(env_path);
        paths.push(env_path.join(CORPUS_FILE));
        paths.push(env_path);
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".wordrank").join(CORPUS_FILE));
    }

    paths.push(PathBuf::from("/usr/share/wordrank").join(CORPUS_FILE));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(CORPUS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Pull every `--corpus=PATH`, `--corpus PATH` or `-c PATH` out of `args`.
///
/// Returns `(corpus_paths, remaining_args)`; paths keep their command-line
/// order, which is also their priority order.
pub fn parse_corpus_paths(args: &[String]) -> Result<(Vec<String>, Vec<String>), String> {
    let mut corpus_paths = Vec::new();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--corpus=") {
            corpus_paths.push(val.to_string());
        } else if arg == "--corpus" || arg == "-c" {
            let val = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?;
            corpus_paths.push(val.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((corpus_paths, remaining))
}

/// Prefix read from one stdin line, or `None` for a blank line.
pub fn stdin_prefix(line: &str) -> Option<&str> {
    let prefix = line.trim();
    (!prefix.is_empty()).then_some(prefix)
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
pub struct SuggestionLine<'a> {
    pub prefix: &'a str,
    pub suggestions: &'a [String],
}

/// Render suggestions as a single JSON object.
pub fn render_json(prefix: &str, suggestions: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SuggestionLine {
        prefix,
        suggestions,
    })
}

/// Render suggestions as an indented plain-text block.
pub fn render_text(prefix: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return format!("{prefix}: (no suggestions)");
    }
    let mut out = format!("{prefix}:");
    for s in suggestions {
        out.push_str("\n  ");
        out.push_str(s);
    }
    out
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
