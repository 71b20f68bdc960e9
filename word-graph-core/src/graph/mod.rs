//! Word-adjacency graph and the algorithms running on it.
//!
//! This module provides:
//! - Text normalization (`tokenizer`)
//! - The graph itself and its one-pass builder (`WordGraph`, `GraphBuilder`)
//! - Bridge word lookup and bridge-assisted text generation
//! - Weighted shortest path (Dijkstra)
//! - Random walk traversal

/// Lowercase, letters-only tokenization of raw text.
pub mod tokenizer;

/// A single word and its weighted outgoing edges.
pub mod node;

/// The `WordGraph` and its builder.
pub mod word_graph;

/// Two-hop bridge word lookup.
pub mod bridge;

/// Bridge-assisted rewriting of a text.
mod text_generator;

/// Minimum-weight path between two words.
pub mod shortest_path;

/// Randomized traversal stopping on a dead end or a repeated edge.
pub mod random_walk;

pub use bridge::format_bridge_words;
pub use node::Node;
pub use random_walk::{RandomWalk, WalkStop};
pub use shortest_path::ShortestPath;
pub use tokenizer::{normalize_word, tokenize};
pub use word_graph::{GraphBuilder, WordGraph};
