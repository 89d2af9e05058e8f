// Ranked trie: arena storage, ranked insertion and exact-prefix lookup.

use hashbrown::HashMap;

use crate::completions::Completions;
use crate::node::{Node, NodeId};
use crate::{Rank, SENTINEL, TrieError};

/// Prefix tree whose nodes carry the best rank of any word below them.
///
/// Terminators always hold [`Rank::MIN`], so a stored word is listed before
/// any of its longer extensions. The word's own rank is kept beside the
/// arena and read back through [`word_rank`](Self::word_rank).
///
/// Nodes live in a single arena owned by the trie. Parent links are arena
/// indices and are never used for ownership. Child lookup goes through an
/// edge map keyed by `(parent, character)`, which also enforces that
/// siblings are unique by character.
///
/// The trie is mutated only through `&mut self`, so any number of readers
/// can enumerate completions concurrently once construction is done.
#[derive(Debug, Clone)]
pub struct RankedTrie {
    nodes: Vec<Node>,
    edges: HashMap<(NodeId, char), NodeId>,
    /// Terminator id to the rank of the word it closes.
    word_ranks: HashMap<NodeId, Rank>,
}

impl Default for RankedTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl RankedTrie {
    /// Create an empty trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(SENTINEL, 0, None, Rank::MAX)],
            edges: HashMap::new(),
            word_ranks: HashMap::new(),
        }
    }

    /// Insert `word` and min-merge `rank` along its whole path.
    ///
    /// Nodes that already exist keep the smaller of their current rank and
    /// `rank`; new nodes start at `rank`. The word is closed by a terminator
    /// child of rank [`Rank::MIN`]. Inserting a word a second time reuses its
    /// terminator, so ranks can only ever go down.
    ///
    /// A failed insert leaves the trie untouched.
    pub fn insert_with_rank(&mut self, word: &str, rank: Rank) -> Result<(), TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }
        if let Some(position) = word.chars().position(|ch| ch == SENTINEL) {
            return Err(TrieError::ReservedCharacter { position });
        }
        // Worst case: every character plus the terminator is a new node.
        ensure_capacity(self.nodes.len(), word.chars().count() + 1)?;

        let mut current = NodeId::ROOT;
        self.lower_rank(current, rank);

        // Once a character misses, every following one misses too, so a
        // single loop covers both the shared prefix and the new suffix.
        for ch in word.chars() {
            current = match self.child(current, ch) {
                Some(child) => {
                    self.lower_rank(child, rank);
                    child
                }
                None => self.push_child(current, ch, rank)?,
            };
        }

        let terminator = match self.child(current, SENTINEL) {
            Some(terminator) => terminator,
            None => self.push_child(current, SENTINEL, Rank::MIN)?,
        };
        self.word_ranks
            .entry(terminator)
            .and_modify(|r| *r = (*r).min(rank))
            .or_insert(rank);
        Ok(())
    }

    /// All completions of `prefix`, best rank first.
    ///
    /// Returns an empty list when any character of `prefix` is missing from
    /// the trie. The empty prefix enumerates the whole vocabulary.
    pub fn matches(&self, prefix: &str) -> Vec<String> {
        self.completions(prefix).collect()
    }

    /// Lazy version of [`matches`](Self::matches).
    ///
    /// Only the part of the subtree needed to produce the items actually
    /// pulled from the iterator is visited.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        match self.find(prefix) {
            Some(start) => Completions::new(self, start, prefix.to_string()),
            None => Completions::empty(self),
        }
    }

    /// Node reached by consuming every character of `prefix`, if any.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(NodeId::ROOT, |node, ch| self.child(node, ch))
    }

    /// Returns `true` if `word` was inserted as a whole word.
    pub fn contains(&self, word: &str) -> bool {
        self.word_rank(word).is_some()
    }

    /// Rank recorded for the complete word `word`.
    pub fn word_rank(&self, word: &str) -> Option<Rank> {
        let node = self.find(word)?;
        let terminator = self.child(node, SENTINEL)?;
        self.word_ranks.get(&terminator).copied()
    }

    /// Rebuild the string spelled by the path from the root to `id`.
    pub fn spell(&self, id: NodeId) -> String {
        let mut chars = Vec::with_capacity(self.node(id).depth);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            if node.character != SENTINEL {
                chars.push(node.character);
            }
            current = node.parent;
        }
        chars.iter().rev().collect()
    }

    /// Look up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this trie.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Child of `id` labelled `ch`.
    pub fn child(&self, id: NodeId, ch: char) -> Option<NodeId> {
        self.edges.get(&(id, ch)).copied()
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.word_ranks.len()
    }

    /// Number of nodes in the arena, root and terminators included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_ranks.is_empty()
    }

    fn push_child(&mut self, parent: NodeId, ch: char, rank: Rank) -> Result<NodeId, TrieError> {
        let index = u32::try_from(self.nodes.len()).map_err(|_| TrieError::CapacityExceeded)?;
        let id = NodeId(index);
        let depth = self.node(parent).depth + 1;
        self.nodes.push(Node::new(ch, depth, Some(parent), rank));
        self.edges.insert((parent, ch), id);

        // The new id is the largest so far, so it goes after every sibling
        // of equal rank.
        let siblings = &self.nodes[parent.index()].children;
        let pos = siblings.partition_point(|&c| (self.nodes[c.index()].rank, c) < (rank, id));
        self.nodes[parent.index()].children.insert(pos, id);
        Ok(id)
    }

    fn lower_rank(&mut self, id: NodeId, rank: Rank) {
        let node = &mut self.nodes[id.index()];
        if rank >= node.rank {
            return;
        }
        node.rank = rank;
        if let Some(parent) = node.parent {
            self.sort_children(parent);
        }
    }

    fn sort_children(&mut self, id: NodeId) {
        let mut children = std::mem::take(&mut self.nodes[id.index()].children);
        children.sort_by_key(|&c| (self.nodes[c.index()].rank, c));
        self.nodes[id.index()].children = children;
    }
}

/// Node ids are `u32`, so an arena holds at most `u32::MAX` nodes.
fn ensure_capacity(existing: usize, extra: usize) -> Result<(), TrieError> {
    existing
        .checked_add(extra)
        .filter(|&total| total <= u32::MAX as usize)
        .map(|_| ())
        .ok_or(TrieError::CapacityExceeded)
}
