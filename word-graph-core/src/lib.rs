//! Word-adjacency graph analysis library.
//!
//! This crate builds a directed weighted graph from a plain-text corpus,
//! where an edge `a -> b` counts how many times `b` immediately follows `a`,
//! and provides:
//! - Bridge word lookup between two words
//! - Text generation splicing bridge words between adjacent words
//! - Weighted shortest path between two words
//! - Random walks stopping on a dead end or a repeated edge
//! - Graphviz output with an optional highlighted path
//!
//! The graph is built once and never modified afterwards. Randomness and
//! rendering are injected, so every operation can be made deterministic.

/// Tokenizer, graph model and the algorithms running on it.
pub mod graph;

/// Graphviz description and the renderer interface.
pub mod render;

/// Menu-level context object owning a graph, a random source and a renderer.
pub mod session;

/// Output locations used by the session.
pub mod config;

/// Library error type.
pub mod error;

/// I/O utilities (corpus loading, output paths).
///
/// Not exposed
pub(crate) mod io;

pub use config::SessionConfig;
pub use error::{Result, WordGraphError};
pub use graph::{RandomWalk, ShortestPath, WalkStop, WordGraph};
pub use session::{Diagram, PathReport, Session};
