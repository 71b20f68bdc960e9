use std::collections::HashSet;
use std::fmt::Write;

use crate::graph::WordGraph;

/// Writes the graph as a Graphviz `digraph` description.
///
/// Every edge carries its weight as label. Edges joining two consecutive
/// words of `highlight` are drawn red and thicker.
///
/// Example:
/// ```text
/// digraph G {
///     "a" -> "b" [label="1", color="red", penwidth=2.0];
///     "b" -> "c" [label="2"];
/// }
/// ```
pub fn to_dot(graph: &WordGraph, highlight: Option<&[String]>) -> String {
	let highlighted: HashSet<(&str, &str)> = highlight
		.unwrap_or_default()
		.windows(2)
		.map(|pair| (pair[0].as_str(), pair[1].as_str()))
		.collect();

	let mut out = String::from("digraph G {\n");
	for (source, target, weight) in graph.edges() {
		let _ = write!(out, "    \"{}\" -> \"{}\" [label=\"{weight}\"", escape(source), escape(target));
		if highlighted.contains(&(source, target)) {
			out.push_str(", color=\"red\", penwidth=2.0");
		}
		out.push_str("];\n");
	}
	out.push_str("}\n");
	out
}

fn escape(word: &str) -> String {
	word.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lists_every_edge_with_weight() {
		let graph = WordGraph::from_text("a b a b c");
		assert_eq!(
			to_dot(&graph, None),
			"digraph G {\n    \"a\" -> \"b\" [label=\"2\"];\n    \"b\" -> \"a\" [label=\"1\"];\n    \"b\" -> \"c\" [label=\"1\"];\n}\n"
		);
	}

	#[test]
	fn highlights_only_consecutive_path_edges() {
		let graph = WordGraph::from_text("a b c a c");
		let path = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
		let dot = to_dot(&graph, Some(path.as_slice()));

		assert!(dot.contains("\"a\" -> \"b\" [label=\"1\", color=\"red\", penwidth=2.0];"));
		assert!(dot.contains("\"b\" -> \"c\" [label=\"1\", color=\"red\", penwidth=2.0];"));
		// both ends are on the path but the edge is not
		assert!(dot.contains("\"a\" -> \"c\" [label=\"1\"];"));
		assert!(dot.contains("\"c\" -> \"a\" [label=\"1\"];"));
	}

	#[test]
	fn empty_graph_is_valid_description() {
		assert_eq!(to_dot(&WordGraph::default(), None), "digraph G {\n}\n");
	}

	#[test]
	fn quotes_are_escaped() {
		assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
	}
}
