//! Diagram output: Graphviz description and the renderer seam.

/// Graphviz `digraph` description of a `WordGraph`.
pub mod dot;

/// `RenderDiagram` trait and its implementations.
pub mod renderer;

pub use dot::to_dot;
pub use renderer::{GraphvizRenderer, NoopRenderer, RenderDiagram};
