//! Error types for the room layer.

use scrawl_game::GameError;
use scrawl_protocol::{PlayerId, RoomId};

/// Errors that can occur during room operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// A game-rule refusal (wrong guesser, not host, room exists, ...).
    #[error(transparent)]
    Game(#[from] GameError),

    /// The player holds no room membership, so there is nowhere to route
    /// the operation.
    #[error("{0} is not in any room")]
    NotInRoom(PlayerId),

    /// The room's actor is gone (its command channel closed).
    #[error("room {0} is unavailable")]
    Unavailable(RoomId),
}
