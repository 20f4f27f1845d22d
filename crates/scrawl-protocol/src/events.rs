//! The socket events exchanged between client and server.
//!
//! Both enums are internally tagged (`{ "type": "guess", "text": "banana" }`)
//! with kebab-case tags, matching the event names the browser client listens
//! for. Changing a tag here is a breaking protocol change.

use serde::{Deserialize, Serialize};

use crate::{PlayerId, PlayerView, RoomId, RoomSnapshot};

// ---------------------------------------------------------------------------
// Client → Server
// ---------------------------------------------------------------------------

/// Everything a client can send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Create a room with the given code and become its host.
    CreateRoom {
        room_id: RoomId,
        display_name: String,
    },

    /// Join an existing room.
    JoinRoom {
        room_id: RoomId,
        display_name: String,
    },

    /// Leave the current room. Closing the socket has the same effect.
    LeaveRoom,

    /// Start the game. Only honored for the room's host.
    StartGame,

    /// Submit a guess. An incorrect guess is relayed as ordinary chat.
    Guess { text: String },

    /// Freehand stroke data, relayed verbatim to the other players.
    /// Opaque to the server — the canvas format is a client concern.
    Draw { payload: serde_json::Value },

    /// Wipe the shared canvas.
    ClearCanvas,
}

// ---------------------------------------------------------------------------
// Server → Client
// ---------------------------------------------------------------------------

/// Everything the server can send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// The room was created; the recipient is its host.
    RoomCreated { room: RoomSnapshot },

    /// Membership or phase changed.
    RoomUpdated { room: RoomSnapshot },

    /// A new round began.
    GameStarted {
        drawer: PlayerId,
        players: Vec<PlayerView>,
        round: u32,
    },

    /// The secret word. Delivered only to the current drawer.
    YourWord { word: String },

    /// Countdown tick.
    Timer { seconds_remaining: u64 },

    /// Someone guessed correctly; the round continues.
    PlayerGuessed {
        player: PlayerId,
        players: Vec<PlayerView>,
    },

    /// An incorrect guess, relayed as chat.
    ChatMessage { sender: PlayerId, text: String },

    /// The round concluded; the word is revealed to everyone.
    RoundEnded {
        word: String,
        players: Vec<PlayerView>,
    },

    /// All rounds played; final standings, best score first.
    GameOver { players: Vec<PlayerView> },

    /// Stroke relay from the drawer.
    Draw {
        sender: PlayerId,
        payload: serde_json::Value,
    },

    /// The canvas was wiped.
    CanvasCleared { sender: PlayerId },

    /// A failed operation, reported only to whoever requested it.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    //! The client dispatches on the `type` tag, so these tests pin the
    //! exact JSON shape of each event the UI depends on.

    use super::*;

    #[test]
    fn test_client_event_tags_are_kebab_case() {
        let ev = ClientEvent::CreateRoom {
            room_id: RoomId::new("R1"),
            display_name: "Alice".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "create-room");
        assert_eq!(json["room_id"], "R1");
        assert_eq!(json["display_name"], "Alice");

        let ev = ClientEvent::StartGame;
        let json: serde_json::Value = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "start-game");
    }

    #[test]
    fn test_guess_round_trip() {
        let ev = ClientEvent::Guess {
            text: "banana".into(),
        };
        let bytes = serde_json::to_vec(&ev).unwrap();
        let decoded: ClientEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(ev, decoded);
    }

    #[test]
    fn test_draw_payload_is_opaque() {
        let ev = ClientEvent::Draw {
            payload: serde_json::json!({ "x": 1, "y": 2, "color": "#000" }),
        };
        let bytes = serde_json::to_vec(&ev).unwrap();
        let decoded: ClientEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(ev, decoded);
    }

    #[test]
    fn test_your_word_json_shape() {
        let ev = ServerEvent::YourWord {
            word: "apple".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "your-word");
        assert_eq!(json["word"], "apple");
    }

    #[test]
    fn test_timer_json_shape() {
        let ev = ServerEvent::Timer {
            seconds_remaining: 59,
        };
        let json: serde_json::Value = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "timer");
        assert_eq!(json["seconds_remaining"], 59);
    }

    #[test]
    fn test_round_ended_json_shape() {
        let ev = ServerEvent::RoundEnded {
            word: "banana".into(),
            players: vec![],
        };
        let json: serde_json::Value = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "round-ended");
        assert_eq!(json["word"], "banana");
    }

    #[test]
    fn test_game_over_json_shape() {
        let ev = ServerEvent::GameOver { players: vec![] };
        let json: serde_json::Value = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "game-over");
    }

    #[test]
    fn test_error_event_round_trip() {
        let ev = ServerEvent::Error {
            message: "room R1 already exists".into(),
        };
        let bytes = serde_json::to_vec(&ev).unwrap();
        let decoded: ServerEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(ev, decoded);
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        let unknown = r#"{"type": "teleport", "x": 3}"#;
        let result: Result<ClientEvent, _> = serde_json::from_str(unknown);
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result: Result<ClientEvent, _> =
            serde_json::from_slice(b"not json at all");
        assert!(result.is_err());
    }
}
