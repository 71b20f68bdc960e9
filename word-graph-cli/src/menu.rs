//! Interactive menu over a built graph.
//!
//! Reads choices line by line and prints results. Operation failures are
//! printed and the loop continues; only I/O errors on the terminal itself
//! end the session.

use std::io::{self, BufRead, Write};
use std::path::Path;

use log::error;
use rand::Rng;
use word_graph_core::render::RenderDiagram;
use word_graph_core::session::Diagram;
use word_graph_core::Session;

const MENU: &str = "Choose an option:
1. Show directed graph
2. Query bridge words
3. Generate new text
4. Calculate shortest path
5. Random walk
6. Generate and visualize graph
0. Exit";

/// Runs the menu until `0` or end of input.
pub fn run<R, D, I, O>(session: &mut Session<R, D>, mut input: I, output: &mut O) -> io::Result<()>
where
	R: Rng,
	D: RenderDiagram,
	I: BufRead,
	O: Write,
{
	loop {
		writeln!(output, "{MENU}")?;
		let Some(choice) = read_line(&mut input)? else {
			return Ok(());
		};

		match choice.trim() {
			"1" => write!(output, "{}", session.show_graph())?,
			"2" => {
				let Some((from, to)) = prompt_two_words(&mut input, output)? else {
					continue;
				};
				writeln!(output, "{}", session.query_bridge_words(&from, &to))?;
			}
			"3" => {
				write!(output, "Enter a new text: ")?;
				output.flush()?;
				let text = read_line(&mut input)?.unwrap_or_default();
				writeln!(output, "{}", session.generate_new_text(&text))?;
			}
			"4" => {
				let Some((from, to)) = prompt_two_words(&mut input, output)? else {
					continue;
				};
				match session.calc_shortest_path(&from, &to) {
					Ok(report) => writeln!(output, "{report}")?,
					Err(e) => writeln!(output, "{e}")?,
				}
			}
			"5" => match session.random_walk() {
				Ok(walk) => {
					writeln!(output, "Random walk: {walk}")?;
					writeln!(output, "Walk written to {}", session.config().walk_output().display())?;
				}
				Err(e) => {
					error!("Random walk failed: {e}");
					writeln!(output, "{e}")?;
				}
			},
			"6" => {
				write!(output, "Enter output image file name (e.g., graph.png): ")?;
				output.flush()?;
				let name = read_line(&mut input)?.unwrap_or_default();
				let name = name.trim();
				if name.is_empty() {
					writeln!(output, "No file name given.")?;
					continue;
				}
				match session.visualize(Path::new(name), None) {
					Ok(diagram) => print_diagram(output, &diagram)?,
					Err(e) => {
						error!("Visualization failed: {e}");
						writeln!(output, "{e}")?;
					}
				}
			}
			"0" => return Ok(()),
			_ => writeln!(output, "Invalid choice.")?,
		}
	}
}

fn print_diagram<O: Write>(output: &mut O, diagram: &Diagram) -> io::Result<()> {
	match &diagram.image {
		Some(image) => writeln!(output, "Graph image generated: {}", image.display()),
		None => writeln!(output, "Graph description written: {}", diagram.description.display()),
	}
}

/// Asks for two whitespace-separated words; extra words are ignored.
fn prompt_two_words<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> io::Result<Option<(String, String)>> {
	write!(output, "Enter two words: ")?;
	output.flush()?;
	let line = read_line(input)?.unwrap_or_default();
	let mut words = line.split_whitespace();
	match (words.next(), words.next()) {
		(Some(from), Some(to)) => Ok(Some((from.to_owned(), to.to_owned()))),
		_ => {
			writeln!(output, "Please enter two words.")?;
			Ok(None)
		}
	}
}

/// Next line without its terminator, `None` at end of input.
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
	let mut line = String::new();
	if input.read_line(&mut line)? == 0 {
		return Ok(None);
	}
	Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}
