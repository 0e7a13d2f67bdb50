use std::{io::Read, process, time::Instant};

use tracing::{error, info};
use transit_catalogue::{
    handler::Handler,
    protocol::{self, InputDocument, ResponseDto},
    render::Renderer,
    router::Router,
};

fn main() {
    tracing_subscriber::fmt().init();

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        error!("failed reading stdin: {err}");
        process::exit(1);
    }

    let document: InputDocument = match serde_json::from_str(&input) {
        Ok(document) => document,
        Err(err) => {
            error!("malformed input: {err}");
            process::exit(1);
        }
    };

    let start = Instant::now();
    let loaded = match protocol::load(document) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };
    info!(elapsed = ?start.elapsed(), "catalogue loaded");

    let router = Router::new(&loaded.catalogue, loaded.routing_settings);
    let renderer = Renderer::new(loaded.render_settings);
    let handler = Handler::new(&loaded.catalogue, &router, &renderer);

    let responses: Vec<ResponseDto> = loaded
        .queries
        .iter()
        .map(|query| ResponseDto::from(&handler.handle(query)))
        .collect();

    match serde_json::to_string(&responses) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!("failed serialising output: {err}");
            process::exit(1);
        }
    }
}
