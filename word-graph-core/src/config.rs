use std::path::{Path, PathBuf};

use crate::error::{Result, WordGraphError};
use crate::io::build_output_path;

/// Output locations and formats used by a [`Session`](crate::session::Session).
///
/// # Responsibilities
/// - Where the diagram description is written before rendering
/// - Where the highlighted graph goes after a shortest path query
/// - Where random walks are logged
/// - Which image format the renderer produces
///
/// # Invariants
/// - No path is empty
/// - `image_format` is a non-empty alphanumeric name
#[derive(Debug, Clone)]
pub struct SessionConfig {
	/// Description file; `None` writes it next to the image with a `.dot` extension.
	dot_path: Option<PathBuf>,

	/// Image produced after each successful shortest path query.
	path_image: PathBuf,

	/// Space-separated log of the last random walk.
	walk_output: PathBuf,

	/// Renderer output format (ex. `png`, `svg`).
	image_format: String,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			dot_path: None,
			path_image: PathBuf::from("graph_with_path.png"),
			walk_output: PathBuf::from("output.txt"),
			image_format: "png".to_owned(),
		}
	}
}

impl SessionConfig {
	/// Description file used when rendering to `image`.
	///
	/// The derived name is `<stem>.dot`, or `<stem>.gv` when the image itself
	/// ends in `.dot`, so the image never overwrites its description.
	///
	/// # Errors
	/// - I/O error if no description path is set and `image` has no filename
	/// - `InvalidConfig` if the fixed description path is the image path
	pub fn dot_path_for(&self, image: &Path) -> Result<PathBuf> {
		match &self.dot_path {
			Some(path) if path == image => Err(WordGraphError::invalid_config(format!(
				"Image {} would overwrite the graph description",
				image.display()
			))),
			Some(path) => Ok(path.clone()),
			None => {
				let path = build_output_path(image, "dot")?;
				if path == image {
					Ok(build_output_path(image, "gv")?)
				} else {
					Ok(path)
				}
			}
		}
	}

	pub fn path_image(&self) -> &Path {
		&self.path_image
	}

	pub fn walk_output(&self) -> &Path {
		&self.walk_output
	}

	pub fn image_format(&self) -> &str {
		&self.image_format
	}

	/// Sets a fixed description file.
	///
	/// # Errors
	/// Returns `InvalidConfig` if the path is empty.
	pub fn set_dot_path<P: Into<PathBuf>>(&mut self, path: P) -> Result<()> {
		self.dot_path = Some(non_empty(path.into(), "dot path")?);
		Ok(())
	}

	pub fn set_path_image<P: Into<PathBuf>>(&mut self, path: P) -> Result<()> {
		self.path_image = non_empty(path.into(), "path image")?;
		Ok(())
	}

	pub fn set_walk_output<P: Into<PathBuf>>(&mut self, path: P) -> Result<()> {
		self.walk_output = non_empty(path.into(), "walk output")?;
		Ok(())
	}

	/// Sets the image format passed to the renderer.
	///
	/// # Errors
	/// Returns `InvalidConfig` if the format is empty or not alphanumeric.
	pub fn set_image_format(&mut self, format: &str) -> Result<()> {
		if format.is_empty() || !format.chars().all(|c| c.is_ascii_alphanumeric()) {
			return Err(WordGraphError::invalid_config(format!("Invalid image format '{format}'")));
		}
		self.image_format = format.to_ascii_lowercase();
		Ok(())
	}
}

fn non_empty(path: PathBuf, what: &str) -> Result<PathBuf> {
	if path.as_os_str().is_empty() {
		return Err(WordGraphError::invalid_config(format!("The {what} cannot be empty")));
	}
	Ok(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_menu_outputs() {
		let config = SessionConfig::default();
		assert_eq!(config.path_image(), Path::new("graph_with_path.png"));
		assert_eq!(config.walk_output(), Path::new("output.txt"));
		assert_eq!(config.image_format(), "png");
		assert_eq!(config.dot_path_for(Path::new("out/graph.png")).unwrap(), PathBuf::from("out/graph.dot"));
	}

	#[test]
	fn fixed_dot_path_wins() {
		let mut config = SessionConfig::default();
		config.set_dot_path("graph.dot").unwrap();
		assert_eq!(config.dot_path_for(Path::new("out/graph.png")).unwrap(), PathBuf::from("graph.dot"));
	}

	#[test]
	fn description_never_shares_the_image_path() {
		let config = SessionConfig::default();
		assert_eq!(config.dot_path_for(Path::new("out/graph.dot")).unwrap(), PathBuf::from("out/graph.gv"));

		let mut config = SessionConfig::default();
		config.set_dot_path("graph.dot").unwrap();
		assert!(matches!(config.dot_path_for(Path::new("graph.dot")), Err(WordGraphError::InvalidConfig(_))));
	}

	#[test]
	fn rejects_empty_values() {
		let mut config = SessionConfig::default();
		assert!(matches!(config.set_walk_output(""), Err(WordGraphError::InvalidConfig(_))));
		assert!(matches!(config.set_image_format(""), Err(WordGraphError::InvalidConfig(_))));
		assert!(matches!(config.set_image_format("../png"), Err(WordGraphError::InvalidConfig(_))));
		config.set_image_format("SVG").unwrap();
		assert_eq!(config.image_format(), "svg");
	}
}
