use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use log::debug;
use serde::Serialize;

use super::word_graph::WordGraph;
use crate::error::{Result, WordGraphError};

/// Minimum-weight path between two words.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
	/// Words from source to target, both included.
	pub words: Vec<String>,
	/// Sum of the edge weights along `words`.
	pub length: usize,
}

impl fmt::Display for ShortestPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Shortest path: {} (length: {})", self.words.join(" -> "), self.length)
	}
}

/// Frontier entry of the Dijkstra search.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the smallest
/// distance comes out first, and among equal distances the entry pushed
/// first.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry<'a> {
	distance: usize,
	order: usize,
	word: &'a str,
}

impl Ord for FrontierEntry<'_> {
	fn cmp(&self, other: &Self) -> Ordering {
		other
			.distance
			.cmp(&self.distance)
			.then_with(|| other.order.cmp(&self.order))
	}
}

impl PartialOrd for FrontierEntry<'_> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl WordGraph {
	/// Computes a minimum-total-weight path from `from` to `to`.
	///
	/// Dijkstra with lazy deletion: stale frontier entries (whose distance is
	/// above the best known one) are skipped when popped, and the search stops
	/// as soon as `to` is popped. A word is its own shortest path with length 0.
	///
	/// # Errors
	/// - `MissingWord` if either word has no node
	/// - `Unreachable` if no directed path leads from `from` to `to`
	pub fn shortest_path(&self, from: &str, to: &str) -> Result<ShortestPath> {
		let (from, to) = self.resolve_pair(from, to)?;

		let mut distances: HashMap<&str, usize> = HashMap::new();
		let mut previous: HashMap<&str, &str> = HashMap::new();
		let mut frontier = BinaryHeap::new();
		let mut order = 0;

		distances.insert(from.as_str(), 0);
		frontier.push(FrontierEntry { distance: 0, order, word: from.as_str() });

		let mut reached = None;
		while let Some(FrontierEntry { distance, word: current, .. }) = frontier.pop() {
			if current == to {
				reached = Some(distance);
				break;
			}
			if distances.get(current).is_some_and(|best| distance > *best) {
				continue;
			}

			for (next, weight) in self.successors(current) {
				let candidate = distance + weight;
				let improved = distances.get(next).is_none_or(|best| candidate < *best);
				if improved {
					distances.insert(next, candidate);
					previous.insert(next, current);
					order += 1;
					frontier.push(FrontierEntry { distance: candidate, order, word: next });
				}
			}
		}

		let Some(length) = reached else {
			debug!("{to} is not reachable from {from}");
			return Err(WordGraphError::Unreachable { from, to });
		};

		let mut words = vec![to.clone()];
		let mut cursor = to.as_str();
		while cursor != from {
			match previous.get(cursor) {
				Some(prev) => {
					words.push((*prev).to_owned());
					cursor = *prev;
				}
				None => break,
			}
		}
		words.reverse();

		debug!("Shortest path from {from} to {to}: {} word(s), length {length}", words.len());
		Ok(ShortestPath { words, length })
	}
}
