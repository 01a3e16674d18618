use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2️⃣ Flags fall back to LISTING_* environment variables
    let cfg = AppConfig::parse();

    // 3️⃣ Start the server
    info!("Starting server at http://{}", cfg.addr);
    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &cfg) {
            Ok(resp) => resp,
            Err(err) => {
                warn!(%method, %path, "request failed: {err}");
                templates::html_error_response(err)
            }
        };

        info!(%method, %path, status = resp.status().as_u16(), "handled request");
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    info!("Server shut down cleanly.");
}
