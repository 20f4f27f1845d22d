//! Unified error type for the server crate.

use scrawl_protocol::ProtocolError;
use scrawl_room::RoomError;

/// Top-level error that wraps the layer-specific errors.
///
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts lower-layer errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ScrawlError {
    /// Socket I/O failed (bind, accept).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The WebSocket layer failed (handshake, frame I/O).
    #[error(transparent)]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// An event could not be encoded or decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A room operation failed.
    #[error(transparent)]
    Room(#[from] RoomError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_protocol::PlayerId;

    #[test]
    fn test_from_protocol_error() {
        let inner = serde_json::from_str::<serde_json::Value>("{")
            .expect_err("malformed json");
        let top: ScrawlError = ProtocolError::Decode(inner).into();
        assert!(matches!(top, ScrawlError::Protocol(_)));
        assert!(top.to_string().contains("decode failed"));
    }

    #[test]
    fn test_from_room_error() {
        let err = RoomError::NotInRoom(PlayerId(3));
        let top: ScrawlError = err.into();
        assert!(matches!(top, ScrawlError::Room(_)));
        assert!(top.to_string().contains("player-3"));
    }
}
