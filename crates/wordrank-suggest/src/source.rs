// The query contract shared by every suggester.

use std::sync::Arc;

/// Anything that can propose completions for a partial word.
///
/// Implementations must not change observable state while answering, so a
/// source can be queried from several threads once it is built.
pub trait SuggestionSource {
    /// Return at most `n` distinct words starting with `prefix`, best first.
    ///
    /// - `prefix`: the input typed so far; empty matches every word
    /// - `n`: maximum number of words; `0` always yields an empty list
    fn suggest_top(&self, prefix: &str, n: usize) -> Vec<String>;
}

impl<S: SuggestionSource + ?Sized> SuggestionSource for &S {
    fn suggest_top(&self, prefix: &str, n: usize) -> Vec<String> {
        (**self).suggest_top(prefix, n)
    }
}

impl<S: SuggestionSource + ?Sized> SuggestionSource for Box<S> {
    fn suggest_top(&self, prefix: &str, n: usize) -> Vec<String> {
        (**self).suggest_top(prefix, n)
    }
}

impl<S: SuggestionSource + ?Sized> SuggestionSource for Arc<S> {
    fn suggest_top(&self, prefix: &str, n: usize) -> Vec<String> {
        (**self).suggest_top(prefix, n)
    }
}
