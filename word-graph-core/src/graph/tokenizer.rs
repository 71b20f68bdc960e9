/// Splits raw text into normalized word tokens.
///
/// The text is lowercased, every character outside `a..=z` becomes a
/// separator, and empty tokens are discarded. Never fails; the result may be
/// empty.
///
/// Example: `"Hello, World!\nhello"` → `["hello", "world", "hello"]`
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| !c.is_ascii_lowercase())
		.filter(|token| !token.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Normalizes a single query word with the tokenizer rules.
///
/// Returns `None` when the input does not reduce to exactly one token
/// (`"--"` or `"two words"`), since no node can carry such a key.
pub fn normalize_word(word: &str) -> Option<String> {
	let mut tokens = tokenize(word).into_iter();
	match (tokens.next(), tokens.next()) {
		(Some(token), None) => Some(token),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_punctuation_digits_and_case() {
		assert_eq!(
			tokenize("To @ explore strange new worlds,\nTo seek out NEW life 42times"),
			vec!["to", "explore", "strange", "new", "worlds", "to", "seek", "out", "new", "life", "times"]
		);
	}

	#[test]
	fn non_latin_letters_are_separators() {
		assert_eq!(tokenize("café au-lait"), vec!["caf", "au", "lait"]);
	}

	#[test]
	fn empty_and_blank_inputs_yield_nothing() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("  \t\n 123 !! ").is_empty());
	}

	#[test]
	fn normalize_word_requires_exactly_one_token() {
		assert_eq!(normalize_word("Hello!"), Some("hello".to_owned()));
		assert_eq!(normalize_word("!!"), None);
		assert_eq!(normalize_word("new life"), None);
	}
}
