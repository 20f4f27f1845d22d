//! `ScrawlServer` builder and accept loop.
//!
//! This is the entry point for running a Scrawl server. It ties the
//! layers together: WebSocket transport → protocol → registry → rooms.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use scrawl_game::{GameConfig, WordList};
use scrawl_protocol::{JsonCodec, PlayerId};
use scrawl_room::RoomRegistry;
use scrawl_timer::TimerConfig;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::ScrawlError;
use crate::handler::handle_connection;

/// Shared server state passed to each connection handler task.
///
/// Wrapped in `Arc` so it can be cheaply cloned across tasks.
pub(crate) struct ServerState {
    pub(crate) registry: Mutex<RoomRegistry>,
    pub(crate) codec: JsonCodec,
    next_player_id: AtomicU64,
}

impl ServerState {
    /// Allocates an id for a new connection. Ids are never reused within
    /// a server's lifetime.
    pub(crate) fn next_player_id(&self) -> PlayerId {
        PlayerId(self.next_player_id.fetch_add(1, Ordering::Relaxed))
    }
}

/// Builder for configuring and starting a Scrawl server.
///
/// # Example
///
/// ```rust,ignore
/// let server = ScrawlServer::builder()
///     .bind("0.0.0.0:8080")
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct ScrawlServerBuilder {
    bind_addr: String,
    game_config: GameConfig,
    timer_config: TimerConfig,
    words: WordList,
}

impl ScrawlServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            game_config: GameConfig::default(),
            timer_config: TimerConfig::default(),
            words: WordList::default(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the game configuration applied to every room.
    pub fn game_config(mut self, config: GameConfig) -> Self {
        self.game_config = config;
        self
    }

    /// Sets the timer configuration applied to every room.
    pub fn timer_config(mut self, config: TimerConfig) -> Self {
        self.timer_config = config;
        self
    }

    /// Replaces the stock word list.
    pub fn words(mut self, words: WordList) -> Self {
        self.words = words;
        self
    }

    /// Binds the listener and builds the server.
    pub async fn build(self) -> Result<ScrawlServer, ScrawlError> {
        let listener = TcpListener::bind(&self.bind_addr).await?;
        tracing::info!(addr = %self.bind_addr, "listening");

        let state = Arc::new(ServerState {
            registry: Mutex::new(RoomRegistry::new(
                self.game_config,
                self.timer_config,
                self.words,
            )),
            codec: JsonCodec,
            next_player_id: AtomicU64::new(1),
        });

        Ok(ScrawlServer { listener, state })
    }
}

impl Default for ScrawlServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running Scrawl server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct ScrawlServer {
    listener: TcpListener,
    state: Arc<ServerState>,
}

impl ScrawlServer {
    /// Creates a new builder.
    pub fn builder() -> ScrawlServerBuilder {
        ScrawlServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Runs the accept loop.
    ///
    /// Each accepted connection gets its own handler task. Runs until
    /// the process is terminated.
    pub async fn run(self) -> Result<(), ScrawlError> {
        tracing::info!("scrawl server running");

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, state).await {
                            tracing::debug!(
                                %addr,
                                error = %e,
                                "connection ended with error"
                            );
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
