//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Interactive word graph explorer
#[derive(Parser, Debug, Clone)]
#[command(name = "word-graph")]
#[command(about = "Build a word-adjacency graph from a text file and query it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// Plain-text corpus to build the graph from
	pub corpus: PathBuf,

	/// Seed for text generation and random walks (random if absent)
	#[arg(long, env = "WORD_GRAPH_SEED")]
	pub seed: Option<u64>,

	/// Graphviz-compatible executable used to draw the graph
	#[arg(long, default_value = "dot")]
	pub renderer: String,

	/// Image format passed to the renderer
	#[arg(short = 'f', long = "format", default_value = "png")]
	pub format: String,

	/// Only write diagram descriptions, never run the renderer
	#[arg(long)]
	pub no_render: bool,

	/// Image written after each shortest path query
	#[arg(long, default_value = "graph_with_path.png")]
	pub path_image: PathBuf,

	/// File receiving the last random walk
	#[arg(long, default_value = "output.txt")]
	pub walk_output: PathBuf,

	/// Verbosity level (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Quiet mode (overrides verbose)
	#[arg(short, long)]
	pub quiet: bool,
}

impl Args {
	/// Default log filter when `RUST_LOG` is not set.
	pub fn log_level(&self) -> &'static str {
		if self.quiet {
			return "error";
		}
		match self.verbose {
			0 => "warn",
			1 => "info",
			_ => "debug",
		}
	}
}
