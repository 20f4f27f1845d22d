//! Identity types and room projections shared across the stack.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a player.
///
/// Assigned per connection; a player who disconnects and comes back gets a
/// fresh id (rejoin means a brand-new player, scores do not carry over).
///
/// `#[serde(transparent)]` keeps the wire shape a plain number, which is
/// what the browser client expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// A room code, chosen by the room's creator.
///
/// Unlike [`PlayerId`] this is a string — players type it into the lobby
/// screen to find each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Creates a room id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The room code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Recipient — who should receive an event?
// ---------------------------------------------------------------------------

/// Specifies who should receive a server event.
///
/// The room actor produces `(Recipient, ServerEvent)` pairs; the delivery
/// code fans them out to the right per-player channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    /// Every player in the room.
    All,
    /// One specific player (e.g. `your-word` goes only to the drawer).
    Player(PlayerId),
    /// Everyone except the given player (e.g. stroke relay skips the sender).
    AllExcept(PlayerId),
}

// ---------------------------------------------------------------------------
// Room projections
// ---------------------------------------------------------------------------

/// One roster entry as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// The player's id.
    pub id: PlayerId,
    /// Display name chosen on join.
    pub name: String,
    /// Current score.
    pub score: u32,
}

/// A snapshot of a room's public state.
///
/// This is what `room-created` / `room-updated` carry. The secret word is
/// deliberately absent — it only ever travels inside `your-word`, addressed
/// to the drawer alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// The room code.
    pub id: RoomId,
    /// The creator; only the host may start the game.
    pub host: PlayerId,
    /// Roster in join order.
    pub players: Vec<PlayerView>,
    /// Current round (0 before the first start).
    pub round: u32,
    /// Rounds per game.
    pub total_rounds: u32,
    /// Whether a round is currently being played.
    pub game_active: bool,
    /// The current drawer, while a round is active.
    pub current_drawer: Option<PlayerId>,
}
