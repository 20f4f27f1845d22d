//! # Scrawl
//!
//! Server for a real-time drawing and guessing party game. Players gather
//! in rooms; each round one of them draws a secret word while the rest
//! race to guess it in chat, earning more points the earlier they get it.
//!
//! The server is split into layers, bottom up:
//!
//! - [`scrawl_protocol`] — the socket events and their JSON codec
//! - [`scrawl_game`] — the synchronous game rules (rotation, scoring)
//! - [`scrawl_timer`] — round countdowns with race-free cancellation
//! - [`scrawl_room`] — one actor task per room, plus the registry
//! - this crate — the WebSocket front door tying them together
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scrawl::ScrawlServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), scrawl::ScrawlError> {
//!     let server = ScrawlServer::builder()
//!         .bind("0.0.0.0:8080")
//!         .build()
//!         .await?;
//!     server.run().await
//! }
//! ```

mod error;
mod handler;
mod server;

pub use error::ScrawlError;
pub use server::{ScrawlServer, ScrawlServerBuilder};
