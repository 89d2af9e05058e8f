// Word suggestion sources
//
// Ranked word completion for partial input. A frequency corpus is loaded
// once into a ranked trie, and any number of sources can be chained so that
// higher-priority sources fill the result first.
//
// Architecture:
//   - `source`: the SuggestionSource trait every suggester implements
//   - `corpus`: corpus line format, load options and load report
//   - `status`: order-preserving, deduplicating result accumulator
//   - `frequency`: trie-backed suggester seeded from a corpus
//   - `chained`: priority-ordered composition of sources

pub mod chained;
pub mod corpus;
pub mod frequency;
pub mod source;
pub mod status;

pub use chained::{BoxedSource, ChainedSuggester};
pub use corpus::{CorpusEntry, CorpusError, CorpusOptions, LineError, LoadReport, SkippedLine};
pub use frequency::FrequencySuggester;
pub use source::SuggestionSource;
pub use status::SuggestionList;
pub use wordrank_trie::{Rank, RankedTrie, TrieError};
