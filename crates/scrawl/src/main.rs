//! Scrawl server binary.
//!
//! Binds to `SCRAWL_ADDR` (default `127.0.0.1:8080`) and serves games
//! until terminated. Log verbosity follows `RUST_LOG`.

use scrawl::{ScrawlError, ScrawlServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ScrawlError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("SCRAWL_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let server = ScrawlServer::builder().bind(&addr).build().await?;
    server.run().await
}
