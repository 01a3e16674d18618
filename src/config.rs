// src/config.rs
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "listing_valuator", about = "Nightly price estimates for short-stay listings")]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    #[arg(long, env = "LISTING_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Upper bound on astra worker threads.
    #[arg(long, env = "LISTING_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Largest request body accepted, in bytes.
    #[arg(long, env = "LISTING_MAX_BODY", default_value_t = 16 * 1024)]
    pub max_body_bytes: usize,

    /// How long the price counter takes to reach its target.
    #[arg(long, env = "LISTING_ANIMATION_MS", default_value_t = 1500)]
    pub animation_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            max_body_bytes: 16 * 1024,
            animation_ms: 1500,
        }
    }
}
