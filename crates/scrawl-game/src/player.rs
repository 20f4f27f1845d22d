//! Player state.

use scrawl_protocol::{PlayerId, PlayerView};

/// One member of a room.
///
/// Created on join, removed on leave or disconnect, never resurrected —
/// a player who rejoins is a brand-new `Player` with a fresh id and a
/// zero score. The score is only ever mutated by the scoring rule in
/// [`Room::handle_guess`](crate::Room::handle_guess).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Connection identity.
    pub id: PlayerId,
    /// Display name chosen on join.
    pub name: String,
    /// Accumulated score. Non-negative by construction.
    pub score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }

    /// The serializable projection sent to clients.
    pub fn view(&self) -> PlayerView {
        PlayerView {
            id: self.id,
            name: self.name.clone(),
            score: self.score,
        }
    }
}
