// wordrank-suggest: print ranked completions for prefixes.
//
// Reads prefixes from the command line, or from stdin (one per line, blank
// lines skipped) when none are given, and prints the best-ranked completions
// for each.
//
// Usage:
//   wordrank-suggest [-c CORPUS]... [OPTIONS] [PREFIX...]
//
// Options:
//   -c, --corpus PATH          Frequency corpus; repeat to chain, highest priority first
//   -n, --max-suggestions N    Maximum number of suggestions (default: 5)
//       --strict               Fail on the first malformed corpus line
//       --json                 Print one JSON object per prefix
//   -h, --help                 Print help

use std::io::{self, BufRead, Write};

use wordrank_suggest::{ChainedSuggester, CorpusOptions, SuggestionSource};

fn main() {
    wordrank_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (corpus_paths, args) =
        wordrank_cli::parse_corpus_paths(&args).unwrap_or_else(|e| wordrank_cli::fatal(&e));

    if wordrank_cli::wants_help(&args) {
        println!("wordrank-suggest: Print ranked word completions.");
        println!();
        println!("Usage: wordrank-suggest [-c CORPUS]... [OPTIONS] [PREFIX...]");
        println!();
        println!("If PREFIX arguments are given, completes each prefix.");
        println!("Otherwise reads prefixes from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -c, --corpus PATH        Frequency corpus; repeat to chain, highest priority first");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("      --strict             Fail on the first malformed corpus line");
        println!("      --json               Print one JSON object per prefix");
        println!("  -h, --help               Print this help");
        println!();
        println!("Environment:");
        println!("  WORDRANK_CORPUS_PATH     Default corpus file or directory");
        println!("  WORDRANK_LOG             Log filter (default: warn)");
        return;
    }

    let mut max_suggestions: usize = 5;
    let mut json = false;
    let mut options = CorpusOptions::default();
    let mut prefixes: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = args[i + 1].parse().unwrap_or_else(|_| {
                    wordrank_cli::fatal("invalid number for --max-suggestions")
                });
                skip_next = true;
            } else {
                wordrank_cli::fatal("--max-suggestions requires a value");
            }
        } else if arg == "--json" {
            json = true;
        } else if arg == "--strict" {
            options.strict = true;
        } else if !arg.starts_with('-') {
            prefixes.push(arg.clone());
        }
    }

    let suggester = wordrank_cli::load_suggester(&corpus_paths, &options)
        .unwrap_or_else(|e| wordrank_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_prefix = |prefix: &str, suggester: &ChainedSuggester, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let suggestions = suggester.suggest_top(prefix, max_suggestions);
        let rendered = if json {
            wordrank_cli::render_json(prefix, &suggestions)
                .unwrap_or_else(|e| wordrank_cli::fatal(&e.to_string()))
        } else {
            wordrank_cli::render_text(prefix, &suggestions)
        };
        let _ = writeln!(out, "{rendered}");
    };

    if prefixes.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let Some(prefix) = wordrank_cli::stdin_prefix(&line) else {
                continue;
            };
            suggest_prefix(prefix, &suggester, &mut out);
        }
    } else {
        for prefix in &prefixes {
            suggest_prefix(prefix, &suggester, &mut out);
        }
    }
}
