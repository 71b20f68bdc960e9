use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::node::Node;
use super::tokenizer::{normalize_word, tokenize};
use crate::error::{Result, WordGraphError};
use crate::io::read_file;

/// Directed word-adjacency graph of a corpus.
///
/// An edge `a -> b` means `b` immediately follows `a` somewhere in the
/// corpus; its weight counts how many times. Adjacency is defined over the
/// flattened word stream, so the last word of a line is linked to the first
/// word of the next one.
///
/// The graph is built once (see [`GraphBuilder`]) and is read-only
/// afterwards. Every query borrows it immutably.
///
/// # Invariants
/// - Each distinct word has exactly one node, keyed by the word itself
/// - Every edge target is also a node, possibly without outgoing edges
/// - Nodes iterate in word order, which keeps seeded random choices reproducible
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WordGraph {
	nodes: BTreeMap<String, Node>,
}

impl WordGraph {
	/// Builds the graph of a whole text.
	pub fn from_text(text: &str) -> Self {
		let mut builder = GraphBuilder::new();
		builder.push_text(text);
		builder.finish()
	}

	/// Builds the graph from a sequence of already normalized tokens.
	pub fn from_tokens<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut builder = GraphBuilder::new();
		for token in tokens {
			builder.push_token(token.as_ref());
		}
		builder.finish()
	}

	/// Reads a corpus file line by line and builds its graph.
	///
	/// # Errors
	/// Returns an I/O error if the file cannot be read.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let mut builder = GraphBuilder::new();
		for line in read_file(&filepath)? {
			builder.push_text(&line);
		}
		let tokens = builder.token_count();
		let graph = builder.finish();
		info!(
			"Built word graph from {}: {} tokens, {} nodes, {} edges",
			filepath.as_ref().display(),
			tokens,
			graph.node_count(),
			graph.edge_count()
		);
		Ok(graph)
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of distinct ordered word pairs.
	pub fn edge_count(&self) -> usize {
		self.nodes.values().map(Node::out_degree).sum()
	}

	/// Sum of all edge weights, i.e. the number of adjacent pairs in the corpus.
	pub fn total_weight(&self) -> usize {
		self.nodes.values().flat_map(|node| node.edges().map(|(_, weight)| weight)).sum()
	}

	pub fn contains(&self, word: &str) -> bool {
		self.nodes.contains_key(word)
	}

	pub fn node(&self, word: &str) -> Option<&Node> {
		self.nodes.get(word)
	}

	/// All nodes in word order.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.nodes.values()
	}

	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.nodes.keys().map(String::as_str)
	}

	/// Outgoing edges of `word` as `(target, weight)`; empty when the word is unknown.
	pub fn successors<'a>(&'a self, word: &str) -> impl Iterator<Item = (&'a str, usize)> + use<'a> {
		self.nodes.get(word).into_iter().flat_map(|node| node.edges())
	}

	/// Weight of the edge `from -> to`, if it exists.
	pub fn weight(&self, from: &str, to: &str) -> Option<usize> {
		self.nodes.get(from)?.weight(to)
	}

	/// Every edge as `(source, target, weight)`, grouped by source in word order.
	pub fn edges(&self) -> impl Iterator<Item = (&str, &str, usize)> {
		self.nodes
			.values()
			.flat_map(|node| node.edges().map(move |(target, weight)| (node.word(), target, weight)))
	}

	/// Textual listing of the graph, one node per line.
	///
	/// Format: `node -> target(weight) target(weight) `
	pub fn describe(&self) -> String {
		let mut out = String::new();
		for node in self.nodes.values() {
			let _ = write!(out, "{} -> ", node.word());
			for (target, weight) in node.edges() {
				let _ = write!(out, "{target}({weight}) ");
			}
			out.push('\n');
		}
		out
	}

	/// Normalizes two query words and checks that both have a node.
	///
	/// # Errors
	/// `MissingWord` listing every word (as typed) that is not in the graph.
	pub(crate) fn resolve_pair(&self, from: &str, to: &str) -> Result<(String, String)> {
		let resolved_from = normalize_word(from).filter(|w| self.contains(w));
		let resolved_to = normalize_word(to).filter(|w| self.contains(w));
		match (resolved_from, resolved_to) {
			(Some(a), Some(b)) => Ok((a, b)),
			(None, Some(_)) => Err(WordGraphError::missing([from])),
			(Some(_), None) => Err(WordGraphError::missing([to])),
			(None, None) => Err(WordGraphError::missing([from, to])),
		}
	}
}

/// One-pass construction of a [`WordGraph`].
///
/// Keeps a cursor on the previous word so that text pushed in several calls
/// (ex. one call per line) is linked across call boundaries.
#[derive(Debug, Default)]
pub struct GraphBuilder {
	nodes: BTreeMap<String, Node>,
	previous: Option<String>,
	tokens: usize,
}

impl GraphBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Tokenizes `text` and adds its words.
	pub fn push_text(&mut self, text: &str) {
		for token in tokenize(text) {
			self.push_token(&token);
		}
	}

	/// Adds one normalized word.
	///
	/// - Creates its node if it was never seen
	/// - Increments the edge from the previous word, if any
	pub fn push_token(&mut self, word: &str) {
		if !self.nodes.contains_key(word) {
			self.nodes.insert(word.to_owned(), Node::new(word));
		}
		if let Some(previous) = self.previous.take() {
			// The previous word always has a node: it was inserted on the last call
			if let Some(node) = self.nodes.get_mut(&previous) {
				node.add_edge(word);
			}
		}
		self.previous = Some(word.to_owned());
		self.tokens += 1;
	}

	/// Number of tokens pushed so far.
	pub fn token_count(&self) -> usize {
		self.tokens
	}

	pub fn finish(self) -> WordGraph {
		WordGraph { nodes: self.nodes }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CORPUS: &str = "To explore strange new worlds,\nTo seek out new life and new civilizations?";

	#[test]
	fn every_word_has_a_node() {
		let graph = WordGraph::from_text(CORPUS);
		for word in tokenize(CORPUS) {
			assert!(graph.contains(&word), "missing node {word}");
		}
		assert_eq!(graph.node_count(), 10);
	}

	#[test]
	fn weights_count_adjacent_occurrences() {
		let graph = WordGraph::from_text("a b a b a c");
		assert_eq!(graph.weight("a", "b"), Some(2));
		assert_eq!(graph.weight("b", "a"), Some(2));
		assert_eq!(graph.weight("a", "c"), Some(1));
		assert_eq!(graph.weight("c", "a"), None);
		assert_eq!(graph.edge_count(), 3);
		assert_eq!(graph.total_weight(), 5);
	}

	#[test]
	fn lines_are_linked_across_breaks() {
		let graph = WordGraph::from_text(CORPUS);
		assert_eq!(graph.weight("worlds", "to"), Some(1));
		assert_eq!(graph.weight("to", "explore"), Some(1));
		assert_eq!(graph.weight("to", "seek"), Some(1));
	}

	#[test]
	fn builder_links_separate_pushes() {
		let mut builder = GraphBuilder::new();
		builder.push_text("hello");
		builder.push_text("");
		builder.push_text("world");
		assert_eq!(builder.token_count(), 2);
		let graph = builder.finish();
		assert_eq!(graph.weight("hello", "world"), Some(1));
	}

	#[test]
	fn last_word_is_a_node_without_edges() {
		let graph = WordGraph::from_text(CORPUS);
		let last = graph.node("civilizations").unwrap();
		assert!(last.is_dead_end());
	}

	#[test]
	fn empty_text_yields_empty_graph() {
		let graph = WordGraph::from_text(" ,;: 42 ");
		assert!(graph.is_empty());
		assert_eq!(graph.edge_count(), 0);
		assert_eq!(graph.describe(), "");
	}

	#[test]
	fn describe_lists_nodes_in_word_order() {
		let graph = WordGraph::from_text("b a b c");
		assert_eq!(graph.describe(), "a -> b(1) \nb -> a(1) c(1) \nc -> \n");
	}

	#[test]
	fn resolve_pair_normalizes_and_reports_missing_words() {
		let graph = WordGraph::from_text(CORPUS);
		assert_eq!(graph.resolve_pair("New", "LIFE").unwrap(), ("new".to_owned(), "life".to_owned()));

		match graph.resolve_pair("new", "moon") {
			Err(WordGraphError::MissingWord { words }) => assert_eq!(words, vec!["moon"]),
			other => panic!("unexpected {other:?}"),
		}
		match graph.resolve_pair("sun", "moon") {
			Err(WordGraphError::MissingWord { words }) => assert_eq!(words, vec!["sun", "moon"]),
			other => panic!("unexpected {other:?}"),
		}
	}
}
