//! Error type shared by every graph operation.
//!
//! Query outcomes that are not a value (a missing word, an empty bridge set,
//! an unreachable target) are reported as variants of [`WordGraphError`] so
//! that callers can match on them. Their `Display` text is the message shown
//! to the user by the interactive menu.

use std::io;

use thiserror::Error;

/// Errors produced by the word graph library.
#[derive(Error, Debug)]
pub enum WordGraphError {
	/// One or more queried words have no node in the graph.
	#[error("{}", missing_message(.words))]
	MissingWord { words: Vec<String> },

	/// Both words are present but no word links them.
	#[error("No bridge words from {from} to {to}!")]
	NoBridgeWords { from: String, to: String },

	/// Both words are present but `to` cannot be reached from `from`.
	#[error("{to} is not reachable from {from}")]
	Unreachable { from: String, to: String },

	/// Corpus, diagram or walk log I/O failure.
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	/// The external renderer could not be started or failed.
	#[error("Render error: {0}")]
	Render(String),

	/// A configuration value was rejected.
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, WordGraphError>;

impl WordGraphError {
	/// Builds a `MissingWord` error, keeping query order and dropping duplicates.
	pub fn missing<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut unique: Vec<String> = Vec::new();
		for word in words {
			let word = word.into();
			if !unique.contains(&word) {
				unique.push(word);
			}
		}
		WordGraphError::MissingWord { words: unique }
	}

	pub fn render<S: Into<String>>(msg: S) -> Self {
		WordGraphError::Render(msg.into())
	}

	pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
		WordGraphError::InvalidConfig(msg.into())
	}

	/// True for the "no result" outcomes of a query, as opposed to failures.
	pub fn is_query_outcome(&self) -> bool {
		matches!(
			self,
			WordGraphError::MissingWord { .. }
				| WordGraphError::NoBridgeWords { .. }
				| WordGraphError::Unreachable { .. }
		)
	}
}

fn missing_message(words: &[String]) -> String {
	match words {
		[] => "No word in the graph!".to_owned(),
		[word] => format!("No {word} in the graph!"),
		_ => format!("No {} in the graph!", words.join(" or ")),
	}
}
