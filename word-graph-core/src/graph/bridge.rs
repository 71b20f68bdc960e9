use std::collections::BTreeSet;

use log::debug;

use super::word_graph::WordGraph;
use crate::error::{Result, WordGraphError};

impl WordGraph {
	/// Finds every bridge word from `from` to `to`.
	///
	/// A bridge word `w` has both edges `from -> w` and `w -> to`. Query
	/// words are normalized before lookup. The returned set iterates in
	/// word order.
	///
	/// # Errors
	/// - `MissingWord` if either word has no node
	/// - `NoBridgeWords` if both exist but nothing links them
	pub fn bridge_words(&self, from: &str, to: &str) -> Result<BTreeSet<String>> {
		let (from, to) = self.resolve_pair(from, to)?;

		let bridges: BTreeSet<String> = self
			.bridge_candidates(&from, &to)
			.into_iter()
			.map(str::to_owned)
			.collect();
		debug!("{} bridge word(s) from {from} to {to}", bridges.len());

		if bridges.is_empty() {
			return Err(WordGraphError::NoBridgeWords { from, to });
		}
		Ok(bridges)
	}

	/// Bridge words between two normalized words, without any error reporting.
	///
	/// Unknown words simply have no bridges.
	pub(crate) fn bridge_candidates(&self, from: &str, to: &str) -> Vec<&str> {
		self.successors(from)
			.filter(|(middle, _)| self.node(middle).is_some_and(|node| node.has_edge(to)))
			.map(|(middle, _)| middle)
			.collect()
	}
}

/// Formats a bridge query result the way the menu prints it.
///
/// Example: `The bridge words from explore to new are: strange`
pub fn format_bridge_words(from: &str, to: &str, bridges: &BTreeSet<String>) -> String {
	let words: Vec<&str> = bridges.iter().map(String::as_str).collect();
	format!("The bridge words from {from} to {to} are: {}", words.join(", "))
}
