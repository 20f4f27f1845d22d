//! Error types for game operations.
//!
//! All of these are user-input errors: recoverable, surfaced to the
//! originating player, never fatal to the process. No operation that
//! returns one of these leaves the room partially mutated.

use scrawl_protocol::{PlayerId, RoomId};

/// Every way a room or game operation can be refused.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No room with that code exists.
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    /// A room with that code already exists.
    #[error("room {0} already exists")]
    RoomExists(RoomId),

    /// The player already holds membership in a room.
    #[error("{0} is already in a room")]
    AlreadyJoined(PlayerId),

    /// The player already guessed correctly this round; a repeat
    /// submission must not score twice.
    #[error("{0} already guessed correctly")]
    AlreadyGuessed(PlayerId),

    /// A game needs at least two players.
    #[error("not enough players to start (have {have}, need 2)")]
    InsufficientPlayers { have: usize },

    /// Only the room's creator may start the game.
    #[error("only the host can start the game")]
    NotHost(PlayerId),

    /// The drawer knows the word; their guesses are rejected.
    #[error("the drawer cannot guess")]
    DrawerCannotGuess(PlayerId),

    /// No round is currently active.
    #[error("game is not active")]
    GameNotActive,

    /// The player is not a member of the room.
    #[error("{0} not found in room")]
    PlayerNotFound(PlayerId),
}
