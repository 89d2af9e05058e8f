// Lazy depth-first enumeration of completions.

use crate::node::NodeId;
use crate::trie::RankedTrie;

/// Iterator over the completions below one trie node, best rank first.
///
/// Holds an explicit DFS stack of `(node, next child index)` frames and the
/// characters spelled so far. Each call to `next` resumes the walk where the
/// previous one stopped, so `take(n)` visits only what it needs.
pub struct Completions<'a> {
    trie: &'a RankedTrie,
    stack: Vec<(NodeId, usize)>,
    path: String,
}

impl<'a> Completions<'a> {
    pub(crate) fn new(trie: &'a RankedTrie, start: NodeId, prefix: String) -> Self {
        Self {
            trie,
            stack: vec![(start, 0)],
            path: prefix,
        }
    }

    pub(crate) fn empty(trie: &'a RankedTrie) -> Self {
        Self {
            trie,
            stack: Vec::new(),
            path: String::new(),
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let trie = self.trie;
        loop {
            let (node, next_child) = self.stack.last_mut()?;
            let children = trie.node(*node).children();

            let Some(&child) = children.get(*next_child) else {
                self.stack.pop();
                // The start frame spells the prefix itself; only frames
                // pushed below it own a character of the path.
                if !self.stack.is_empty() {
                    self.path.pop();
                }
                continue;
            };
            *next_child += 1;

            let child_node = trie.node(child);
            if child_node.is_leaf() {
                return Some(self.path.clone());
            }
            self.path.push(child_node.character());
            self.stack.push((child, 0));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::RankedTrie;

    #[test]
    fn take_stops_early() {
        let mut trie = RankedTrie::new();
        trie.insert_with_rank("the", 1).unwrap();
        trie.insert_with_rank("that", 2).unwrap();
        trie.insert_with_rank("than", 3).unwrap();

        let top: Vec<String> = trie.completions("th").take(2).collect();
        assert_eq!(top, vec!["the", "that"]);
    }

    #[test]
    fn resumes_after_partial_consumption() {
        let mut trie = RankedTrie::new();
        for (word, rank) in [("go", 1), ("good", 2), ("goat", 3), ("gone", 4)] {
            trie.insert_with_rank(word, rank).unwrap();
        }

        let mut it = trie.completions("go");
        assert_eq!(it.next().as_deref(), Some("go"));
        assert_eq!(it.next().as_deref(), Some("good"));
        assert_eq!(it.collect::<Vec<_>>(), vec!["goat", "gone"]);
    }

    #[test]
    fn depth_first_within_best_subtree() {
        // "b..." has the best rank, so its whole subtree comes before "a".
        let mut trie = RankedTrie::new();
        trie.insert_with_rank("a", 2).unwrap();
        trie.insert_with_rank("bx", 1).unwrap();
        trie.insert_with_rank("by", 5).unwrap();

        assert_eq!(trie.matches(""), vec!["bx", "by", "a"]);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut trie = RankedTrie::new();
        trie.insert_with_rank("x", 1).unwrap();

        let mut it = trie.completions("x");
        assert_eq!(it.next().as_deref(), Some("x"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn unknown_prefix_is_empty() {
        let mut trie = RankedTrie::new();
        trie.insert_with_rank("x", 1).unwrap();
        assert_eq!(trie.completions("y").next(), None);
    }
}
