use std::collections::HashSet;
use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::Serialize;

use super::word_graph::WordGraph;

/// Why a random walk stopped.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStop {
	/// The graph has no node to start from.
	EmptyGraph,
	/// The current word has no outgoing edge.
	DeadEnd,
	/// The drawn edge was already traversed during this walk.
	RepeatedEdge,
}

/// One randomized traversal of the graph.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RandomWalk {
	/// Visited words, starting node first.
	pub words: Vec<String>,
	pub stop: WalkStop,
}

impl fmt::Display for RandomWalk {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.words.join(" "))
	}
}

impl WordGraph {
	/// Walks the graph at random until a dead end or a repeated edge.
	///
	/// # Behavior
	/// - The start node is drawn uniformly among all nodes.
	/// - At each step one outgoing edge is drawn uniformly (weights are ignored).
	/// - If that edge was already traversed in this walk, the walk stops
	///   without appending its target.
	///
	/// # Notes
	/// - Each edge is traversed at most once, so a walk holds at most
	///   `edge_count() + 1` words.
	/// - An empty graph yields an empty walk.
	pub fn random_walk<R: Rng + ?Sized>(&self, rng: &mut R) -> RandomWalk {
		let Some(start) = self.nodes().choose(rng) else {
			return RandomWalk { words: Vec::new(), stop: WalkStop::EmptyGraph };
		};

		let mut words = vec![start.word().to_owned()];
		let mut visited: HashSet<(&str, &str)> = HashSet::new();
		let mut current = start;

		let stop = loop {
			let Some(next) = current.choose_successor(rng) else {
				break WalkStop::DeadEnd;
			};
			if !visited.insert((current.word(), next)) {
				break WalkStop::RepeatedEdge;
			}
			words.push(next.to_owned());
			match self.node(next) {
				Some(node) => current = node,
				// Edge targets always have a node
				None => break WalkStop::DeadEnd,
			}
		};

		debug!("Random walk of {} word(s) stopped on {stop:?}", words.len());
		RandomWalk { words, stop }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn empty_graph_gives_empty_walk() {
		let mut rng = StdRng::seed_from_u64(5);
		let walk = WordGraph::default().random_walk(&mut rng);
		assert!(walk.words.is_empty());
		assert_eq!(walk.stop, WalkStop::EmptyGraph);
	}

	#[test]
	fn chain_walk_ends_on_dead_end() {
		// A single chain: whatever the start, the walk follows it to the end
		let graph = WordGraph::from_text("one two three four");
		let mut rng = StdRng::seed_from_u64(9);
		for _ in 0..16 {
			let walk = graph.random_walk(&mut rng);
			assert_eq!(walk.stop, WalkStop::DeadEnd);
			assert_eq!(walk.words.last().map(String::as_str), Some("four"));
		}
	}

	#[test]
	fn cycle_walk_stops_before_repeating() {
		// a -> b -> c -> a: every walk covers the cycle once and stops
		let graph = WordGraph::from_text("a b c a");
		let mut rng = StdRng::seed_from_u64(2);
		let walk = graph.random_walk(&mut rng);
		assert_eq!(walk.stop, WalkStop::RepeatedEdge);
		assert_eq!(walk.words.len(), 4);
		assert_eq!(walk.words.first(), walk.words.last());
	}

	#[test]
	fn walk_follows_edges_without_repeats() {
		let graph = WordGraph::from_text("the cat saw the dog and the dog saw the cat and ran");
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..64 {
			let walk = graph.random_walk(&mut rng);
			assert!(walk.words.len() <= graph.edge_count() + 1);
			let mut seen = HashSet::new();
			for pair in walk.words.windows(2) {
				assert!(graph.weight(&pair[0], &pair[1]).is_some());
				assert!(seen.insert((pair[0].clone(), pair[1].clone())));
			}
		}
	}

	#[test]
	fn display_joins_with_spaces() {
		let walk = RandomWalk { words: vec!["a".into(), "b".into()], stop: WalkStop::DeadEnd };
		assert_eq!(walk.to_string(), "a b");
	}
}
