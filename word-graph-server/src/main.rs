use std::env;

use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use word_graph_core::graph::format_bridge_words;
use word_graph_core::render::to_dot;
use word_graph_core::{WordGraph, WordGraphError};

/// Query parameters of the endpoints taking two words
#[derive(Deserialize)]
struct PairQuery {
	from: Option<String>,
	to: Option<String>,
}

/// Query parameters of `/v1/generate`
#[derive(Deserialize)]
struct GenerateQuery {
	text: Option<String>,
	seed: Option<u64>,
}

/// Query parameters of `/v1/walk`
#[derive(Deserialize)]
struct WalkQuery {
	seed: Option<u64>,
}

#[derive(Serialize)]
struct GraphStats {
	nodes: usize,
	edges: usize,
	total_weight: usize,
}

#[derive(Serialize)]
struct BridgeResponse {
	words: Vec<String>,
	message: String,
}

/// Graph built at startup; handlers only read it.
struct SharedData {
	graph: WordGraph,
}

impl PairQuery {
	/// Both words, or a message naming the missing parameter.
	fn words(&self) -> Result<(&str, &str), String> {
		match (self.from.as_deref(), self.to.as_deref()) {
			(Some(from), Some(to)) if !from.trim().is_empty() && !to.trim().is_empty() => Ok((from, to)),
			_ => Err("Both 'from' and 'to' parameters are required".to_owned()),
		}
	}

	/// Neither word was given.
	fn is_empty(&self) -> bool {
		self.from.is_none() && self.to.is_none()
	}
}

/// Seeded source when a seed is given, OS entropy otherwise.
fn make_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	}
}

/// Maps a library error onto an HTTP response.
///
/// Query outcomes (missing word, no bridge, unreachable) are `404`,
/// everything else is a server error.
fn error_response(e: WordGraphError) -> HttpResponse {
	if e.is_query_outcome() {
		HttpResponse::NotFound().body(e.to_string())
	} else {
		error!("Request failed: {e}");
		HttpResponse::InternalServerError().body(e.to_string())
	}
}

/// HTTP GET endpoint `/v1/graph`
///
/// Textual listing of every node and its weighted edges.
#[get("/v1/graph")]
async fn get_graph(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().body(data.graph.describe())
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().json(GraphStats {
		nodes: data.graph.node_count(),
		edges: data.graph.edge_count(),
		total_weight: data.graph.total_weight(),
	})
}

/// HTTP GET endpoint `/v1/bridge?from=..&to=..`
#[get("/v1/bridge")]
async fn get_bridge(data: web::Data<SharedData>, query: web::Query<PairQuery>) -> impl Responder {
	let (from, to) = match query.words() {
		Ok(words) => words,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	match data.graph.bridge_words(from, to) {
		Ok(bridges) => HttpResponse::Ok().json(BridgeResponse {
			message: format_bridge_words(from, to, &bridges),
			words: bridges.into_iter().collect(),
		}),
		Err(e) => error_response(e),
	}
}

/// HTTP GET endpoint `/v1/generate?text=..[&seed=..]`
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateQuery>) -> impl Responder {
	let text = query.text.as_deref().unwrap_or_default();
	let mut rng = make_rng(query.seed);
	HttpResponse::Ok().body(data.graph.generate_text(text, &mut rng))
}

/// HTTP GET endpoint `/v1/path?from=..&to=..`
#[get("/v1/path")]
async fn get_path(data: web::Data<SharedData>, query: web::Query<PairQuery>) -> impl Responder {
	let (from, to) = match query.words() {
		Ok(words) => words,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	match data.graph.shortest_path(from, to) {
		Ok(path) => HttpResponse::Ok().json(path),
		Err(e) => error_response(e),
	}
}

/// HTTP GET endpoint `/v1/walk[?seed=..]`
#[get("/v1/walk")]
async fn get_walk(data: web::Data<SharedData>, query: web::Query<WalkQuery>) -> impl Responder {
	let mut rng = make_rng(query.seed);
	HttpResponse::Ok().json(data.graph.random_walk(&mut rng))
}

/// HTTP GET endpoint `/v1/dot[?from=..&to=..]`
///
/// Graphviz description; with both words, their shortest path is highlighted.
/// Giving only one of them is a bad request.
#[get("/v1/dot")]
async fn get_dot(data: web::Data<SharedData>, query: web::Query<PairQuery>) -> impl Responder {
	let highlight = if query.is_empty() {
		None
	} else {
		let (from, to) = match query.words() {
			Ok(words) => words,
			Err(e) => return HttpResponse::BadRequest().body(e),
		};
		match data.graph.shortest_path(from, to) {
			Ok(path) => Some(path.words),
			Err(e) => return error_response(e),
		}
	};

	HttpResponse::Ok()
		.content_type("text/vnd.graphviz")
		.body(to_dot(&data.graph, highlight.as_deref()))
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_graph)
		.service(get_stats)
		.service(get_bridge)
		.service(get_generated)
		.service(get_path)
		.service(get_walk)
		.service(get_dot);
}

/// Main entry point for the server.
///
/// Builds the word graph from the corpus given as first argument
/// (`./data/corpus.txt` by default) and serves it read-only.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - The graph is shared between workers without locking since it is never modified.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let corpus = env::args().nth(1).unwrap_or_else(|| "./data/corpus.txt".to_owned());
	let graph = match WordGraph::from_file(&corpus) {
		Ok(graph) => graph,
		Err(e) => {
			error!("Failed to load {corpus}: {e}");
			return Err(std::io::Error::other(e));
		}
	};
	info!("Serving {} nodes from {corpus}", graph.node_count());

	let shared_data = web::Data::new(SharedData { graph });

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(configure)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	const CORPUS: &str = "To explore strange new worlds,\nTo seek out new life and new civilizations?";

	fn data() -> web::Data<SharedData> {
		web::Data::new(SharedData { graph: WordGraph::from_text(CORPUS) })
	}

	#[actix_web::test]
	async fn bridge_endpoint_returns_words() {
		let app = test::init_service(App::new().app_data(data()).configure(configure)).await;

		let req = test::TestRequest::get().uri("/v1/bridge?from=explore&to=new").to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["words"], serde_json::json!(["strange"]));

		let req = test::TestRequest::get().uri("/v1/bridge?from=explore&to=moon").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::NOT_FOUND);

		let req = test::TestRequest::get().uri("/v1/bridge?from=explore").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn path_endpoint_returns_path_and_length() {
		let app = test::init_service(App::new().app_data(data()).configure(configure)).await;

		let req = test::TestRequest::get().uri("/v1/path?from=to&to=life").to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["length"], 4);
		assert_eq!(body["words"][0], "to");

		let req = test::TestRequest::get().uri("/v1/path?from=civilizations&to=to").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::NOT_FOUND);
	}

	#[actix_web::test]
	async fn seeded_generation_is_reproducible() {
		let app = test::init_service(App::new().app_data(data()).configure(configure)).await;

		let req = test::TestRequest::get().uri("/v1/generate?text=explore%20new&seed=3").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, "explore strange new");
	}

	#[actix_web::test]
	async fn dot_endpoint_highlights_path() {
		let app = test::init_service(App::new().app_data(data()).configure(configure)).await;

		let req = test::TestRequest::get().uri("/v1/dot?from=explore&to=new").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let text = String::from_utf8(body.to_vec()).unwrap();
		assert!(text.contains("\"explore\" -> \"strange\" [label=\"1\", color=\"red\", penwidth=2.0];"));
	}

	#[actix_web::test]
	async fn dot_endpoint_rejects_half_pair() {
		let app = test::init_service(App::new().app_data(data()).configure(configure)).await;

		let req = test::TestRequest::get().uri("/v1/dot?from=explore").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::get().uri("/v1/dot").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);
	}

	#[actix_web::test]
	async fn seeded_walk_follows_edges() {
		let graph = WordGraph::from_text(CORPUS);
		let app = test::init_service(App::new().app_data(data()).configure(configure)).await;

		let req = test::TestRequest::get().uri("/v1/walk?seed=17").to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		let stop = body["stop"].as_str().unwrap();
		assert!(stop == "DeadEnd" || stop == "RepeatedEdge", "unexpected stop {stop}");

		let words: Vec<&str> = body["words"].as_array().unwrap().iter().map(|w| w.as_str().unwrap()).collect();
		assert!(!words.is_empty());
		assert!(words.len() <= graph.edge_count() + 1);
		for pair in words.windows(2) {
			assert!(graph.weight(pair[0], pair[1]).is_some());
		}

		let req = test::TestRequest::get().uri("/v1/walk?seed=17").to_request();
		let again: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body, again);
	}

	#[actix_web::test]
	async fn stats_and_listing_describe_the_graph() {
		let app = test::init_service(App::new().app_data(data()).configure(configure)).await;

		let req = test::TestRequest::get().uri("/v1/stats").to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["nodes"], 10);
		assert_eq!(body["edges"], 12);
		assert_eq!(body["total_weight"], 12);

		let req = test::TestRequest::get().uri("/v1/graph").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let text = String::from_utf8(body.to_vec()).unwrap();
		assert!(text.contains("new -> civilizations(1) life(1) worlds(1) \n"));
	}
}
