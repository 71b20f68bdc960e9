use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Invalid UTF-8 sequences are replaced rather than rejected
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut bytes = Vec::new();
	File::open(filename)?.read_to_end(&mut bytes)?;
	Ok(String::from_utf8_lossy(&bytes).lines().map(str::to_owned).collect())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `out/graph.png` + `"dot"` → `out/graph.dot`
pub(crate) fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Output path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Writes words separated by single spaces, without a trailing newline.
pub(crate) fn write_words<P: AsRef<Path>>(filename: P, words: &[String]) -> io::Result<()> {
	fs::write(filename, words.join(" "))
}
