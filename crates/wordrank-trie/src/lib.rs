//! Rank-annotated prefix trie.
//!
//! Every node records the best (numerically smallest) rank of any word whose
//! path passes through it, so a depth-first walk that visits children in
//! ascending rank order yields completions best-first.
//!
//! # Architecture
//!
//! - [`node`] -- Arena node and its identifier
//! - [`trie`] -- Ranked insertion and prefix lookup
//! - [`completions`] -- Lazy depth-first completion iterator

pub mod completions;
pub mod node;
pub mod trie;

pub use completions::Completions;
pub use node::{Node, NodeId};
pub use trie::RankedTrie;

/// Word priority. Smaller values are suggested first.
pub type Rank = u32;

/// Character stored on the root and on word terminators.
///
/// Words may not contain it.
pub const SENTINEL: char = '\0';

/// Error type for trie insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    #[error("cannot insert an empty word")]
    EmptyWord,
    #[error("word contains the reserved sentinel character at position {position}")]
    ReservedCharacter { position: usize },
    #[error("trie is full: node ids are limited to u32")]
    CapacityExceeded,
}
