// Frequency corpus format and loading.
//
// A corpus is plain text with one `<rank><TAB><word>` record per line.
// Smaller ranks are suggested first. There is no header and no escaping.

use std::io::BufRead;
use std::path::PathBuf;

use tracing::warn;
use wordrank_trie::{Rank, RankedTrie, TrieError};

/// Options controlling how a corpus is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusOptions {
    /// Field separator between rank and word.
    pub delimiter: char,
    /// Abort on the first malformed line instead of skipping it.
    pub strict: bool,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            strict: false,
        }
    }
}

/// One parsed corpus record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub rank: Rank,
    pub word: String,
}

/// Why a single corpus line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("expected 2 fields, found {found}")]
    FieldCount { found: usize },
    #[error("invalid rank {value:?}")]
    InvalidRank { value: String },
    #[error("invalid word: {0}")]
    Word(#[from] TrieError),
}

/// A line that was skipped during a lenient load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line_number: usize,
    pub reason: LineError,
}

/// Summary of a corpus load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records inserted into the trie (repeated words count each time).
    pub inserted: usize,
    /// Whitespace-only lines, ignored without complaint.
    pub blank: usize,
    /// Malformed lines that were skipped.
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Returns `true` if no line was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Error type for corpus loading failures.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The corpus file could not be opened.
    #[error("failed to open corpus {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading failed part way through (I/O error or invalid UTF-8).
    #[error("failed to read corpus at line {line_number}: {source}")]
    Read {
        line_number: usize,
        source: std::io::Error,
    },

    /// A malformed line was found while loading in strict mode.
    #[error("malformed corpus line {line_number}: {reason}")]
    Malformed {
        line_number: usize,
        reason: LineError,
    },
}

/// Parse one corpus line into a record.
///
/// The rank field may carry surrounding whitespace; the word is taken as is.
pub fn parse_line(line: &str, delimiter: char) -> Result<CorpusEntry, LineError> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    let [rank, word] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    };

    let rank = rank
        .trim()
        .parse::<Rank>()
        .map_err(|_| LineError::InvalidRank {
            value: rank.to_string(),
        })?;
    if word.is_empty() {
        return Err(TrieError::EmptyWord.into());
    }

    Ok(CorpusEntry {
        rank,
        word: word.to_string(),
    })
}

/// Read every record from `reader` into `trie`.
///
/// Malformed lines are skipped and listed in the returned report unless
/// `options.strict` is set, in which case the first one aborts the load.
/// Records inserted before an error stay in the trie.
pub fn load_corpus<R: BufRead>(
    reader: R,
    options: &CorpusOptions,
    trie: &mut RankedTrie,
) -> Result<LoadReport, CorpusError> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| CorpusError::Read {
            line_number,
            source,
        })?;
        if line.trim().is_empty() {
            report.blank += 1;
            continue;
        }

        let outcome = parse_line(&line, options.delimiter).and_then(|entry| {
            trie.insert_with_rank(&entry.word, entry.rank)
                .map_err(LineError::from)
        });

        match outcome {
            Ok(()) => report.inserted += 1,
            Err(reason) if options.strict => {
                return Err(CorpusError::Malformed {
                    line_number,
                    reason,
                });
            }
            Err(reason) => {
                warn!(line_number, %reason, "skipping malformed corpus line");
                report.skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }

    Ok(report)
}
