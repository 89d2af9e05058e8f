// Trie-backed suggester seeded from a frequency corpus.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;
use wordrank_trie::{Rank, RankedTrie, TrieError};

use crate::corpus::{CorpusError, CorpusOptions, LoadReport, load_corpus};
use crate::source::SuggestionSource;

/// Suggests the best-ranked completions stored in a [`RankedTrie`].
///
/// Built once from a corpus and then only read, so a single instance can
/// serve queries from many threads.
#[derive(Debug, Clone, Default)]
pub struct FrequencySuggester {
    trie: RankedTrie,
    report: LoadReport,
}

impl FrequencySuggester {
    /// Create a suggester with an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a corpus file with default options.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        Self::from_path_with_options(path, &CorpusOptions::default())
    }

    /// Load a corpus file.
    ///
    /// A missing or unreadable file is an error; malformed lines are handled
    /// according to `options.strict`.
    pub fn from_path_with_options(
        path: impl AsRef<Path>,
        options: &CorpusOptions,
    ) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CorpusError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let suggester = Self::from_reader(BufReader::new(file), options)?;
        info!(
            path = %path.display(),
            words = suggester.trie.word_count(),
            inserted = suggester.report.inserted,
            skipped = suggester.report.skipped.len(),
            "loaded frequency corpus"
        );
        Ok(suggester)
    }

    /// Load a corpus from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, options: &CorpusOptions) -> Result<Self, CorpusError> {
        let mut trie = RankedTrie::new();
        let report = load_corpus(reader, options, &mut trie)?;
        Ok(Self { trie, report })
    }

    /// Load a corpus held in memory.
    pub fn parse(text: &str, options: &CorpusOptions) -> Result<Self, CorpusError> {
        Self::from_reader(text.as_bytes(), options)
    }

    /// Build from `(word, rank)` pairs.
    pub fn from_entries<I, W>(entries: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = (W, Rank)>,
        W: AsRef<str>,
    {
        let mut suggester = Self::new();
        for (word, rank) in entries {
            suggester.insert_with_rank(word.as_ref(), rank)?;
        }
        Ok(suggester)
    }

    /// Add one word. Requires exclusive access, so it can never overlap a query.
    pub fn insert_with_rank(&mut self, word: &str, rank: Rank) -> Result<(), TrieError> {
        self.trie.insert_with_rank(word, rank)?;
        self.report.inserted += 1;
        Ok(())
    }

    pub fn trie(&self) -> &RankedTrie {
        &self.trie
    }

    /// What happened while the corpus was loaded.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

impl SuggestionSource for FrequencySuggester {
    fn suggest_top(&self, prefix: &str, n: usize) -> Vec<String> {
        if n == 0 {
            return Vec::new();
        }
        self.trie.completions(prefix).take(n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn the_that_than() -> FrequencySuggester {
        FrequencySuggester::from_entries([("the", 1), ("that", 2), ("than", 3)]).unwrap()
    }

    #[test]
    fn suggest_top_truncates() {
        let s = the_that_than();
        assert_eq!(s.suggest_top("th", 2), vec!["the", "that"]);
        assert_eq!(s.suggest_top("th", 3), vec!["the", "that", "than"]);
    }

    #[test]
    fn suggest_top_returns_fewer_when_short() {
        let s = the_that_than();
        assert_eq!(s.suggest_top("tha", 10), vec!["that", "than"]);
    }

    #[test]
    fn zero_count_is_empty() {
        let s = the_that_than();
        assert!(s.suggest_top("th", 0).is_empty());
        assert!(s.suggest_top("", 0).is_empty());
    }

    #[test]
    fn absent_prefix_is_empty() {
        let s = FrequencySuggester::from_entries([("apple", 1)]).unwrap();
        assert!(s.suggest_top("b", 5).is_empty());
        assert!(s.trie().matches("b").is_empty());
    }

    #[test]
    fn empty_prefix_ranks_everything() {
        let s = the_that_than();
        assert_eq!(s.suggest_top("", 2), vec!["the", "that"]);
    }

    #[test]
    fn min_merge_through_suggester() {
        let s = FrequencySuggester::from_entries([("cow", 3), ("cat", 5), ("cat", 2)]).unwrap();
        assert_eq!(s.suggest_top("c", 2), vec!["cat", "cow"]);
    }

    #[test]
    fn empty_suggester() {
        let s = FrequencySuggester::new();
        assert!(s.suggest_top("", 5).is_empty());
        assert!(s.report().is_clean());
    }

    #[test]
    fn parse_keeps_report() {
        let s = FrequencySuggester::parse("1\tone\nnope\n2\ttwo\n", &CorpusOptions::default())
            .unwrap();
        assert_eq!(s.report().inserted, 2);
        assert_eq!(s.report().skipped.len(), 1);
        assert_eq!(s.suggest_top("", 5), vec!["one", "two"]);
    }

    #[test]
    fn complete_word_precedes_its_extensions() {
        let s = FrequencySuggester::from_entries([("a", 10), ("an", 2)]).unwrap();
        assert_eq!(s.suggest_top("a", 1), vec!["a"]);
        assert_eq!(s.suggest_top("a", 2), vec!["a", "an"]);
    }

    #[test]
    fn from_entries_rejects_bad_word() {
        let err = FrequencySuggester::from_entries([("ok", 1), ("", 2)]).unwrap_err();
        assert_eq!(err, TrieError::EmptyWord);
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FrequencySuggester>();
    }
}
