//! Interactive word graph explorer.

mod args;
mod menu;

use std::io;
use std::process;

use clap::Parser;
use log::info;
use word_graph_core::render::{GraphvizRenderer, NoopRenderer, RenderDiagram};
use word_graph_core::{Session, SessionConfig, WordGraph};

use args::Args;

fn main() {
	let args = Args::parse();

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level())).init();

	if let Err(e) = run(args) {
		eprintln!("Error: {e}");
		process::exit(1);
	}
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
	let mut config = SessionConfig::default();
	config.set_image_format(&args.format)?;
	config.set_path_image(&args.path_image)?;
	config.set_walk_output(&args.walk_output)?;

	// Build the graph once; every menu action reads it
	let graph = WordGraph::from_file(&args.corpus)?;
	info!("Loaded {}", args.corpus.display());

	let renderer: Box<dyn RenderDiagram> = if args.no_render {
		Box::new(NoopRenderer)
	} else {
		Box::new(GraphvizRenderer::new(args.renderer))
	};

	let mut session = Session::with_seed(graph, args.seed, renderer, config);
	let stdin = io::stdin();
	let mut stdout = io::stdout();
	menu::run(&mut session, stdin.lock(), &mut stdout)?;
	Ok(())
}
