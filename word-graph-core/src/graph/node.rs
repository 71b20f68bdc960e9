use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IteratorRandom;

use serde::{Deserialize, Serialize};

/// A word of the corpus and its outgoing edges.
///
/// Each edge points to a word that immediately followed `word` somewhere in
/// the corpus, weighted by how many times that happened.
///
/// ## Invariants
/// - All edges start from the same `word`
/// - Each edge weight is strictly positive
/// - There is at most one edge per target (repetitions only raise the weight)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Node {
	/// Normalized word identifying the node.
	word: String,
	/// Outgoing edges indexed by target word.
	/// Example: { "new" => 2, "strange" => 1 }
	edges: BTreeMap<String, usize>,
}

impl Node {
	/// Creates a node without outgoing edges.
	pub fn new(word: &str) -> Self {
		Self {
			word: word.to_owned(),
			edges: BTreeMap::new(),
		}
	}

	pub fn word(&self) -> &str {
		&self.word
	}

	/// Records one more occurrence of `next` right after this word.
	///
	/// - If the edge already exists, its weight is increased.
	/// - Otherwise, a new edge is created with a weight of 1.
	pub(crate) fn add_edge(&mut self, next: &str) {
		match self.edges.get_mut(next) {
			Some(weight) => *weight += 1,
			None => {
				self.edges.insert(next.to_owned(), 1);
			}
		}
	}

	/// Weight of the edge toward `next`, if any.
	pub fn weight(&self, next: &str) -> Option<usize> {
		self.edges.get(next).copied()
	}

	pub fn has_edge(&self, next: &str) -> bool {
		self.edges.contains_key(next)
	}

	/// Outgoing edges as `(target, weight)`, in word order.
	pub fn edges(&self) -> impl Iterator<Item = (&str, usize)> {
		self.edges.iter().map(|(target, weight)| (target.as_str(), *weight))
	}

	pub fn out_degree(&self) -> usize {
		self.edges.len()
	}

	/// A node without outgoing edges ends every random walk reaching it.
	pub fn is_dead_end(&self) -> bool {
		self.edges.is_empty()
	}

	/// Picks one successor uniformly, ignoring weights.
	///
	/// Returns `None` on a dead end.
	pub fn choose_successor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.edges.keys().choose(rng).map(String::as_str)
	}
}
