use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::graph::{RandomWalk, ShortestPath, WordGraph, format_bridge_words};
use crate::io::write_words;
use crate::render::{RenderDiagram, to_dot};

/// Files produced by [`Session::visualize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
	/// Graphviz description, always written.
	pub description: PathBuf,
	/// Rendered image, absent when the renderer produced no bytes.
	pub image: Option<PathBuf>,
}

/// Outcome of a shortest path query from the menu.
///
/// The path is kept even when drawing it failed; `diagram` is then `None`.
#[derive(Debug, Clone)]
pub struct PathReport {
	pub path: ShortestPath,
	pub diagram: Option<Diagram>,
}

impl fmt::Display for PathReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.path)?;
		match &self.diagram {
			Some(Diagram { image: Some(image), .. }) => {
				write!(f, "\nGraph image generated: {}", image.display())
			}
			Some(Diagram { description, image: None }) => {
				write!(f, "\nGraph description written: {}", description.display())
			}
			None => Ok(()),
		}
	}
}

/// Owns a built graph together with everything its operations need.
///
/// One method per menu action. The graph is never modified after the
/// session is created; the random source and the renderer are injected so
/// that tests can fix the former and fake the latter.
///
/// # Responsibilities
/// - Format query results the way the menu prints them
/// - Draw the graph (optionally highlighting a path) through `RenderDiagram`
/// - Log random walks to the configured file
pub struct Session<R: Rng, D: RenderDiagram> {
	graph: WordGraph,
	rng: R,
	renderer: D,
	config: SessionConfig,
}

impl<D: RenderDiagram> Session<StdRng, D> {
	/// Creates a session with a standard random source.
	///
	/// A `seed` makes every random operation reproducible; without one the
	/// source is seeded from the operating system.
	pub fn with_seed(graph: WordGraph, seed: Option<u64>, renderer: D, config: SessionConfig) -> Self {
		let rng = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self::new(graph, rng, renderer, config)
	}
}

impl<R: Rng, D: RenderDiagram> Session<R, D> {
	pub fn new(graph: WordGraph, rng: R, renderer: D, config: SessionConfig) -> Self {
		Self { graph, rng, renderer, config }
	}

	pub fn graph(&self) -> &WordGraph {
		&self.graph
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	/// Textual listing of every node and its weighted edges.
	pub fn show_graph(&self) -> String {
		self.graph.describe()
	}

	/// Bridge word query, formatted for display.
	///
	/// Missing words and empty results are reported as messages, not errors.
	pub fn query_bridge_words(&self, from: &str, to: &str) -> String {
		match self.graph.bridge_words(from, to) {
			Ok(bridges) => format_bridge_words(from, to, &bridges),
			Err(e) => e.to_string(),
		}
	}

	/// Rewrites `text` with bridge words spliced in.
	pub fn generate_new_text(&mut self, text: &str) -> String {
		self.graph.generate_text(text, &mut self.rng)
	}

	/// Shortest path query, then draws the graph with the path highlighted.
	///
	/// # Errors
	/// `MissingWord` or `Unreachable` from the query. A drawing failure is
	/// logged and leaves `diagram` empty instead.
	pub fn calc_shortest_path(&self, from: &str, to: &str) -> Result<PathReport> {
		let path = self.graph.shortest_path(from, to)?;
		let diagram = match self.visualize(self.config.path_image(), Some(path.words.as_slice())) {
			Ok(diagram) => Some(diagram),
			Err(e) => {
				warn!("Could not draw shortest path: {e}");
				None
			}
		};
		Ok(PathReport { path, diagram })
	}

	/// Random walk, logged as space-separated words to the configured file.
	///
	/// # Errors
	/// Returns an I/O error if the log cannot be written.
	pub fn random_walk(&mut self) -> Result<RandomWalk> {
		let walk = self.graph.random_walk(&mut self.rng);
		write_words(self.config.walk_output(), &walk.words)?;
		info!("Random walk written to {}", self.config.walk_output().display());
		Ok(walk)
	}

	/// Draws the whole graph to `output`, highlighting `highlight` if given.
	///
	/// # Behavior
	/// - Writes the description first (see `SessionConfig::dot_path_for`)
	/// - Renders it in the configured format
	/// - Writes the image only if the renderer returned bytes
	///
	/// # Errors
	/// Returns an I/O error for file writes or a `Render` error from the renderer.
	pub fn visualize(&self, output: &Path, highlight: Option<&[String]>) -> Result<Diagram> {
		let description_path = self.config.dot_path_for(output)?;
		let description = to_dot(&self.graph, highlight);
		fs::write(&description_path, &description)?;

		let bytes = self.renderer.render(&description, self.config.image_format())?;
		let image = if bytes.is_empty() {
			None
		} else {
			fs::write(output, &bytes)?;
			info!("Graph image generated: {}", output.display());
			Some(output.to_path_buf())
		};

		Ok(Diagram { description: description_path, image })
	}
}
