// Arena node for the ranked trie.

use crate::{Rank, SENTINEL};

/// Index of a node inside a [`RankedTrie`](crate::RankedTrie) arena.
///
/// Ids are handed out in creation order, which makes them usable as the
/// insertion-order tie-break between siblings of equal rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One character position in the trie.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) character: char,
    /// Kept sorted by `(rank, id)` so enumeration never has to sort.
    pub(crate) children: Vec<NodeId>,
    /// Back-reference for upward traversal only. `None` on the root.
    pub(crate) parent: Option<NodeId>,
    pub(crate) depth: usize,
    pub(crate) rank: Rank,
}

impl Node {
    pub(crate) fn new(character: char, depth: usize, parent: Option<NodeId>, rank: Rank) -> Self {
        Self {
            character,
            children: Vec::new(),
            parent,
            depth,
            rank,
        }
    }

    /// The character this node represents ([`SENTINEL`] for root and terminators).
    pub fn character(&self) -> char {
        self.character
    }

    /// Child ids in enumeration order (ascending rank, then insertion order).
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Distance from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Smallest rank of any word passing through this node.
    ///
    /// Terminators always report [`Rank::MIN`].
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// A leaf has no children. Only word terminators are leaves.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this node marks the end of a stored word.
    pub fn is_terminator(&self) -> bool {
        self.parent.is_some() && self.character == SENTINEL
    }
}
