//! The room registry: creates rooms, destroys empty ones, and routes
//! players' events to the right actor.
//!
//! The registry tracks which room each player is in. A player is in at
//! most one room at a time, which is what lets a bare disconnect be
//! handled without the client saying which room it meant.

use std::collections::HashMap;

use scrawl_game::{GameConfig, GameError, Player, WordList};
use scrawl_protocol::{PlayerId, RoomId, RoomSnapshot};
use scrawl_timer::TimerConfig;

use crate::RoomError;
use crate::actor::{OutboundSender, RoomHandle, spawn_room};

/// Creates, indexes, and destroys rooms. One per server.
pub struct RoomRegistry {
    rooms: HashMap<RoomId, RoomHandle>,
    /// Which room each connected player is in. At most one entry per
    /// player; absence means not in any room.
    player_rooms: HashMap<PlayerId, RoomId>,
    game_config: GameConfig,
    timer_config: TimerConfig,
    words: WordList,
}

impl RoomRegistry {
    pub fn new(
        game_config: GameConfig,
        timer_config: TimerConfig,
        words: WordList,
    ) -> Self {
        Self {
            rooms: HashMap::new(),
            player_rooms: HashMap::new(),
            game_config,
            timer_config,
            words,
        }
    }

    /// Number of live rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The room `player_id` is currently in, if any.
    pub fn player_room(&self, player_id: PlayerId) -> Option<&RoomId> {
        self.player_rooms.get(&player_id)
    }

    /// Creates a room with `player_id` as host and sole member.
    pub fn create_room(
        &mut self,
        room_id: RoomId,
        player_id: PlayerId,
        name: String,
        sender: OutboundSender,
    ) -> Result<RoomSnapshot, RoomError> {
        if self.rooms.contains_key(&room_id) {
            return Err(GameError::RoomExists(room_id).into());
        }
        if self.player_rooms.contains_key(&player_id) {
            return Err(GameError::AlreadyJoined(player_id).into());
        }

        let (handle, snapshot) = spawn_room(
            room_id.clone(),
            Player::new(player_id, name),
            sender,
            &self.game_config,
            self.timer_config.clone(),
            self.words.clone(),
        );
        self.rooms.insert(room_id.clone(), handle);
        self.player_rooms.insert(player_id, room_id.clone());
        tracing::info!(room = %room_id, %player_id, "room created");
        Ok(snapshot)
    }

    /// Adds `player_id` to an existing room.
    pub async fn join_room(
        &mut self,
        room_id: RoomId,
        player_id: PlayerId,
        name: String,
        sender: OutboundSender,
    ) -> Result<RoomSnapshot, RoomError> {
        if self.player_rooms.contains_key(&player_id) {
            return Err(GameError::AlreadyJoined(player_id).into());
        }
        let handle = self
            .rooms
            .get(&room_id)
            .ok_or_else(|| GameError::RoomNotFound(room_id.clone()))?
            .clone();

        let snapshot = handle.join(player_id, name, sender).await?;
        self.player_rooms.insert(player_id, room_id);
        Ok(snapshot)
    }

    /// Removes `player_id` from whatever room it is in. Idempotent:
    /// leaving while not in a room is a no-op. Destroys the room if it
    /// empties.
    pub async fn leave_room(&mut self, player_id: PlayerId) {
        let Some(room_id) = self.player_rooms.remove(&player_id) else {
            return;
        };
        let Some(handle) = self.rooms.get(&room_id).cloned() else {
            return;
        };

        match handle.leave(player_id).await {
            Ok(reply) if reply.now_empty => {
                self.rooms.remove(&room_id);
                tracing::info!(room = %room_id, "room destroyed");
            }
            Ok(_) => {}
            Err(_) => {
                // Actor already gone; forget the handle too.
                self.rooms.remove(&room_id);
            }
        }
    }

    /// Routes a start-game request to the player's room.
    pub async fn start_game(&self, player_id: PlayerId) -> Result<(), RoomError> {
        self.handle_for(player_id)?.start_game(player_id).await
    }

    /// Routes a guess to the player's room.
    pub async fn guess(
        &self,
        player_id: PlayerId,
        text: String,
    ) -> Result<(), RoomError> {
        self.handle_for(player_id)?.guess(player_id, text).await
    }

    /// Relays stroke data to the player's room.
    pub async fn draw(
        &self,
        player_id: PlayerId,
        payload: serde_json::Value,
    ) -> Result<(), RoomError> {
        self.handle_for(player_id)?.draw(player_id, payload).await
    }

    /// Relays a canvas wipe to the player's room.
    pub async fn clear_canvas(&self, player_id: PlayerId) -> Result<(), RoomError> {
        self.handle_for(player_id)?.clear_canvas(player_id).await
    }

    /// Snapshot of the player's current room.
    pub async fn snapshot(&self, player_id: PlayerId) -> Result<RoomSnapshot, RoomError> {
        self.handle_for(player_id)?.snapshot().await
    }

    fn handle_for(&self, player_id: PlayerId) -> Result<&RoomHandle, RoomError> {
        let room_id = self
            .player_rooms
            .get(&player_id)
            .ok_or(RoomError::NotInRoom(player_id))?;
        self.rooms
            .get(room_id)
            .ok_or_else(|| RoomError::Unavailable(room_id.clone()))
    }
}
