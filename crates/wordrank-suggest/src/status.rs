// Result accumulator: bounded, deduplicating, insertion-ordered.

use hashbrown::HashSet;

/// Collects suggestions up to a fixed count, dropping exact duplicates and
/// keeping the order in which words were first added.
///
/// Used to merge the output of several sources: whatever a higher-priority
/// source produced stays in front of anything added later.
#[derive(Debug, Clone)]
pub struct SuggestionList {
    /// Maximum number of words that can be collected.
    max_suggestions: usize,
    /// Collected words, in first-seen order.
    words: Vec<String>,
    /// Already-collected words for deduplication.
    seen: HashSet<String>,
}

impl SuggestionList {
    pub fn new(max_suggestions: usize) -> Self {
        Self {
            max_suggestions,
            // Callers may pass very large limits; only reserve what is cheap.
            words: Vec::with_capacity(max_suggestions.min(64)),
            seen: HashSet::new(),
        }
    }

    /// Add a word. Returns `false` if it was a duplicate or the list is full.
    pub fn add(&mut self, word: String) -> bool {
        if self.is_full() || self.seen.contains(word.as_str()) {
            return false;
        }
        self.seen.insert(word.clone());
        self.words.push(word);
        true
    }

    /// How many more words fit.
    pub fn remaining(&self) -> usize {
        self.max_suggestions - self.words.len()
    }

    pub fn is_full(&self) -> bool {
        self.words.len() >= self.max_suggestions
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl Extend<String> for SuggestionList {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            if self.is_full() {
                break;
            }
            self.add(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_is_empty() {
        let list = SuggestionList::new(3);
        assert!(list.is_empty());
        assert_eq!(list.remaining(), 3);
        assert_eq!(list.max_suggestions(), 3);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut list = SuggestionList::new(5);
        assert!(list.add("the".to_string()));
        assert!(!list.add("the".to_string()));
        assert_eq!(list.len(), 1);
        assert_eq!(list.remaining(), 4);
    }

    #[test]
    fn keeps_first_seen_order() {
        let mut list = SuggestionList::new(5);
        list.extend(["zebra", "apple", "zebra", "mango"].map(String::from));
        assert_eq!(list.words(), ["zebra", "apple", "mango"]);
    }

    #[test]
    fn excess_words_are_dropped() {
        let mut list = SuggestionList::new(2);
        list.extend(["a", "b", "c"].map(String::from));
        assert!(list.is_full());
        assert!(!list.add("d".to_string()));
        assert_eq!(list.into_words(), vec!["a", "b"]);
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let mut list = SuggestionList::new(0);
        assert!(list.is_full());
        assert!(!list.add("a".to_string()));
        assert_eq!(list.remaining(), 0);
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        let mut list = SuggestionList::new(5);
        list.extend(["The", "the"].map(String::from));
        assert_eq!(list.len(), 2);
    }
}
