//! Per-connection handler: event decoding and dispatch.
//!
//! Each accepted socket gets its own Tokio task running this handler.
//! The socket is split: a writer task drains the player's outbound
//! channel into the sink (room broadcasts arrive on that channel from
//! whatever task produced them), while this task reads frames, decodes
//! [`ClientEvent`]s, and dispatches them through the registry.
//!
//! The connection *is* the player: an id is allocated on accept, and the
//! socket closing — cleanly or not — is treated as leaving the room.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use scrawl_protocol::{ClientEvent, Codec, PlayerId, ServerEvent};
use scrawl_room::{OutboundSender, RoomError};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

use crate::ScrawlError;
use crate::server::ServerState;

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection(
    stream: TcpStream,
    state: Arc<ServerState>,
) -> Result<(), ScrawlError> {
    let ws = tokio_tungstenite::accept_async(stream).await?;
    let player_id = state.next_player_id();
    tracing::debug!(%player_id, "connection accepted");

    let (mut sink, mut source) = ws.split();

    // Outbound path: room actors push ServerEvents into this channel;
    // the writer task owns the sink and serializes them onto the wire.
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<ServerEvent>();
    let codec = state.codec;
    let writer = tokio::spawn(async move {
        while let Some(event) = out_rx.recv().await {
            let bytes = match codec.encode(&event) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::error!(error = %e, "failed to encode event");
                    continue;
                }
            };
            if sink.send(Message::Binary(bytes.into())).await.is_err() {
                break;
            }
        }
        let _ = sink.close().await;
    });

    // Inbound path: decode and dispatch until the socket closes.
    while let Some(msg) = source.next().await {
        let data = match msg {
            Ok(Message::Binary(data)) => data.to_vec(),
            Ok(Message::Text(text)) => text.as_bytes().to_vec(),
            Ok(Message::Close(_)) => break,
            Ok(_) => continue, // ping/pong/frame
            Err(e) => {
                tracing::debug!(%player_id, error = %e, "socket error");
                break;
            }
        };

        let event: ClientEvent = match state.codec.decode(&data) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(%player_id, error = %e, "undecodable event");
                let _ = out_tx.send(ServerEvent::Error {
                    message: "unrecognized event".into(),
                });
                continue;
            }
        };

        dispatch(&state, player_id, &out_tx, event).await;
    }

    // Cleanup runs on every exit path, including abrupt disconnects.
    state.registry.lock().await.leave_room(player_id).await;
    writer.abort();
    tracing::debug!(%player_id, "connection closed");
    Ok(())
}

/// Applies one client event.
async fn dispatch(
    state: &Arc<ServerState>,
    player_id: PlayerId,
    out_tx: &OutboundSender,
    event: ClientEvent,
) {
    match event {
        ClientEvent::CreateRoom {
            room_id,
            display_name,
        } => {
            let result = state.registry.lock().await.create_room(
                room_id,
                player_id,
                display_name,
                out_tx.clone(),
            );
            match result {
                Ok(room) => {
                    let _ = out_tx.send(ServerEvent::RoomCreated { room });
                }
                Err(e) => report(out_tx, &e),
            }
        }

        ClientEvent::JoinRoom {
            room_id,
            display_name,
        } => {
            // The joiner hears about the new roster through the same
            // RoomUpdated broadcast as everyone else.
            let result = state
                .registry
                .lock()
                .await
                .join_room(room_id, player_id, display_name, out_tx.clone())
                .await;
            if let Err(e) = result {
                report(out_tx, &e);
            }
        }

        ClientEvent::LeaveRoom => {
            state.registry.lock().await.leave_room(player_id).await;
        }

        ClientEvent::StartGame => {
            // Rule refusals (not host, too few players) come back through
            // the room actor as Error events; only routing failures land
            // here.
            if let Err(e) = state.registry.lock().await.start_game(player_id).await
            {
                report(out_tx, &e);
            }
        }

        ClientEvent::Guess { text } => {
            if let Err(e) =
                state.registry.lock().await.guess(player_id, text).await
            {
                report(out_tx, &e);
            }
        }

        ClientEvent::Draw { payload } => {
            if let Err(e) =
                state.registry.lock().await.draw(player_id, payload).await
            {
                report(out_tx, &e);
            }
        }

        ClientEvent::ClearCanvas => {
            if let Err(e) =
                state.registry.lock().await.clear_canvas(player_id).await
            {
                report(out_tx, &e);
            }
        }
    }
}

/// Reports a failed operation back to the player who requested it.
fn report(out_tx: &OutboundSender, error: &RoomError) {
    let _ = out_tx.send(ServerEvent::Error {
        message: error.to_string(),
    });
}
