// Priority-ordered composition of suggestion sources.

use tracing::debug;

use crate::source::SuggestionSource;
use crate::status::SuggestionList;

/// A source that can live inside a [`ChainedSuggester`].
pub type BoxedSource = Box<dyn SuggestionSource + Send + Sync>;

/// Asks each source in priority order until enough words are collected.
///
/// Every source is first asked only for the number of words still missing.
/// Words already produced by an earlier source are dropped, and the output
/// keeps earlier sources' words in front of later ones. When dropped
/// duplicates leave the list short, the same source is asked again for a
/// longer list until it runs dry or the list is full.
///
/// A `ChainedSuggester` is itself a source, so chains nest.
#[derive(Default)]
pub struct ChainedSuggester {
    /// Highest priority first.
    sources: Vec<BoxedSource>,
}

impl ChainedSuggester {
    /// Create a chain from sources ordered highest priority first.
    pub fn new(sources: Vec<BoxedSource>) -> Self {
        Self { sources }
    }

    /// Append a lower-priority source (builder style).
    pub fn with_source<S>(mut self, source: S) -> Self
    where
        S: SuggestionSource + Send + Sync + 'static,
    {
        self.push(source);
        self
    }

    /// Append a lower-priority source.
    pub fn push<S>(&mut self, source: S)
    where
        S: SuggestionSource + Send + Sync + 'static,
    {
        self.sources.push(Box::new(source));
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl SuggestionSource for ChainedSuggester {
    fn suggest_top(&self, prefix: &str, n: usize) -> Vec<String> {
        let mut list = SuggestionList::new(n);

        for (index, source) in self.sources.iter().enumerate() {
            if list.is_full() {
                break;
            }
            // A full batch that still leaves the list short means some of it
            // was already seen. The source's top `k` is a prefix of its top
            // `k + m`, so ask again for everything it returned plus what is
            // still missing.
            let mut wanted = list.remaining();
            loop {
                let batch = source.suggest_top(prefix, wanted);
                let returned = batch.len();
                let before = list.len();
                list.extend(batch);
                debug!(
                    source = index,
                    wanted,
                    returned,
                    added = list.len() - before,
                    "queried chained suggestion source"
                );
                if list.is_full() || returned < wanted {
                    break;
                }
                wanted = returned + list.remaining();
            }
        }

        list.into_words()
    }
}

impl std::fmt::Debug for ChainedSuggester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedSuggester")
            .field("sources", &self.sources.len())
            .finish()
    }
}
