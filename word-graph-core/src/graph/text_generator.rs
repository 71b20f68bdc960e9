use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::tokenizer::tokenize;
use super::word_graph::WordGraph;

impl WordGraph {
	/// Rewrites `text`, splicing a bridge word between adjacent words.
	///
	/// # Behavior
	/// - `text` is normalized with the tokenizer; output words are lowercase
	///   and separated by single spaces.
	/// - For each adjacent pair with at least one bridge word, one of them is
	///   picked uniformly with `rng` and inserted between the two words.
	/// - Pairs without bridge words are left untouched.
	///
	/// # Notes
	/// - Original words always appear, in their original order.
	/// - A single word comes back unchanged; an empty text yields `""`.
	pub fn generate_text<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
		let words = tokenize(text);
		let mut output: Vec<&str> = Vec::with_capacity(words.len() * 2);
		let mut inserted = 0;

		for (i, word) in words.iter().enumerate() {
			output.push(word);
			let Some(next) = words.get(i + 1) else {
				break;
			};
			let bridges = self.bridge_candidates(word, next);
			if let Some(bridge) = bridges.choose(rng).copied() {
				output.push(bridge);
				inserted += 1;
			}
		}

		debug!("Inserted {inserted} bridge word(s) into {} word(s)", words.len());
		output.join(" ")
	}
}
