use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use log::debug;

use crate::error::{Result, WordGraphError};

/// Turns a diagram description into image bytes.
///
/// The core never depends on a specific renderer binary: the session only
/// talks to this trait, and tests substitute an in-memory fake.
pub trait RenderDiagram {
	/// Renders `description` to the given image `format` (ex. `"png"`).
	///
	/// # Errors
	/// Returns `Render` if the renderer cannot be run or rejects the input.
	fn render(&self, description: &str, format: &str) -> Result<Vec<u8>>;
}

impl<T: RenderDiagram + ?Sized> RenderDiagram for Box<T> {
	fn render(&self, description: &str, format: &str) -> Result<Vec<u8>> {
		(**self).render(description, format)
	}
}

/// Renders through a Graphviz-compatible executable (`dot -T<format>`).
///
/// The description is written to the process stdin and the image is read
/// back from its stdout.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
	program: String,
}

impl GraphvizRenderer {
	pub fn new<S: Into<String>>(program: S) -> Self {
		Self { program: program.into() }
	}

	pub fn program(&self) -> &str {
		&self.program
	}
}

impl Default for GraphvizRenderer {
	fn default() -> Self {
		Self::new("dot")
	}
}

impl RenderDiagram for GraphvizRenderer {
	fn render(&self, description: &str, format: &str) -> Result<Vec<u8>> {
		let mut child = Command::new(&self.program)
			.arg(format!("-T{format}"))
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.spawn()
			.map_err(|e| WordGraphError::render(format!("Failed to start {}: {e}", self.program)))?;

		// Feed stdin from another thread so a large image cannot fill stdout and block us
		let mut stdin = child
			.stdin
			.take()
			.ok_or_else(|| WordGraphError::render("Renderer stdin unavailable"))?;
		let input = description.to_owned();
		let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

		let output = child.wait_with_output()?;
		let written = writer
			.join()
			.map_err(|_| WordGraphError::render("Renderer input thread panicked"))?;

		// A renderer that exits early closes stdin; its status says more than the broken pipe
		if !output.status.success() {
			return Err(WordGraphError::render(format!(
				"{} exited with {}: {}",
				self.program,
				output.status,
				String::from_utf8_lossy(&output.stderr).trim()
			)));
		}
		written.map_err(|e| WordGraphError::render(format!("{} did not read its input: {e}", self.program)))?;

		debug!("{} produced {} byte(s) of {format}", self.program, output.stdout.len());
		Ok(output.stdout)
	}
}

/// Renderer that produces no image at all.
///
/// Used when rendering is disabled; the description is still written.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl RenderDiagram for NoopRenderer {
	fn render(&self, _description: &str, _format: &str) -> Result<Vec<u8>> {
		Ok(Vec::new())
	}
}
