//! Room actor: an isolated Tokio task that owns one game instance.
//!
//! The actor is the orchestrator: it applies each inbound event to the
//! [`Room`] state machine, translates the tagged result into outbound
//! [`ServerEvent`]s, and arms or cancels the [`RoundTimer`]. Commands and
//! timer firings are multiplexed by one `select!` loop, so a guess and a
//! countdown expiry on the same room can never interleave — cancellation
//! happens *as part of* marking a round complete, before the next inbox
//! item is looked at.

use std::collections::HashMap;

use scrawl_game::{
    GameConfig, GameError, GuessOutcome, Player, Room, RoundOutcome, WordList,
};
use scrawl_protocol::{PlayerId, Recipient, RoomId, RoomSnapshot, ServerEvent};
use scrawl_timer::{RoundTimer, TimerConfig, TimerEvent};
use tokio::sync::{mpsc, oneshot};

use crate::RoomError;

/// Channel sender for delivering outbound events to a player's connection.
pub type OutboundSender = mpsc::UnboundedSender<ServerEvent>;

/// What a leave did, reported back so the registry can drop empty rooms.
#[derive(Debug, Clone, Copy)]
pub struct LeaveReply {
    /// A player was actually removed.
    pub removed: bool,
    /// The roster emptied; the actor has stopped and the registry must
    /// forget the handle.
    pub now_empty: bool,
}

/// Commands sent to a room actor through its channel.
pub(crate) enum RoomCommand {
    Join {
        player_id: PlayerId,
        name: String,
        sender: OutboundSender,
        reply: oneshot::Sender<Result<RoomSnapshot, RoomError>>,
    },
    Leave {
        player_id: PlayerId,
        reply: oneshot::Sender<LeaveReply>,
    },
    /// Host pressed start. Failures go back as an `error` event, so no
    /// reply channel is needed.
    StartGame { player_id: PlayerId },
    Guess {
        player_id: PlayerId,
        text: String,
    },
    Draw {
        player_id: PlayerId,
        payload: serde_json::Value,
    },
    ClearCanvas { player_id: PlayerId },
    Snapshot {
        reply: oneshot::Sender<RoomSnapshot>,
    },
}

/// Handle to a running room actor. Cheap to clone — it's an
/// `mpsc::Sender` wrapper. The [`RoomRegistry`](crate::RoomRegistry)
/// holds one per room.
#[derive(Clone)]
pub struct RoomHandle {
    room_id: RoomId,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    fn unavailable(&self) -> RoomError {
        RoomError::Unavailable(self.room_id.clone())
    }

    async fn send(&self, cmd: RoomCommand) -> Result<(), RoomError> {
        self.sender.send(cmd).await.map_err(|_| self.unavailable())
    }

    /// Adds a player and returns the post-join snapshot.
    pub async fn join(
        &self,
        player_id: PlayerId,
        name: String,
        sender: OutboundSender,
    ) -> Result<RoomSnapshot, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::Join {
            player_id,
            name,
            sender,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(|_| self.unavailable())?
    }

    /// Removes a player. Idempotent.
    pub async fn leave(
        &self,
        player_id: PlayerId,
    ) -> Result<LeaveReply, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::Leave {
            player_id,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(|_| self.unavailable())
    }

    /// Requests a game start on behalf of `player_id`.
    pub async fn start_game(&self, player_id: PlayerId) -> Result<(), RoomError> {
        self.send(RoomCommand::StartGame { player_id }).await
    }

    /// Delivers a guess.
    pub async fn guess(
        &self,
        player_id: PlayerId,
        text: String,
    ) -> Result<(), RoomError> {
        self.send(RoomCommand::Guess { player_id, text }).await
    }

    /// Relays stroke data.
    pub async fn draw(
        &self,
        player_id: PlayerId,
        payload: serde_json::Value,
    ) -> Result<(), RoomError> {
        self.send(RoomCommand::Draw { player_id, payload }).await
    }

    /// Relays a canvas wipe.
    pub async fn clear_canvas(&self, player_id: PlayerId) -> Result<(), RoomError> {
        self.send(RoomCommand::ClearCanvas { player_id }).await
    }

    /// Requests the current public snapshot.
    pub async fn snapshot(&self) -> Result<RoomSnapshot, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::Snapshot { reply: reply_tx }).await?;
        reply_rx.await.map_err(|_| self.unavailable())
    }
}

/// Whether the actor loop keeps running after a command.
#[derive(PartialEq)]
enum Flow {
    Continue,
    Stop,
}

/// The internal room actor state. Runs inside a Tokio task.
struct RoomActor {
    room: Room,
    words: WordList,
    timer: RoundTimer,
    /// Per-player outbound channels.
    senders: HashMap<PlayerId, OutboundSender>,
    receiver: mpsc::Receiver<RoomCommand>,
    timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
}

impl RoomActor {
    async fn run(mut self) {
        tracing::info!(room = %self.room.id(), "room actor started");

        loop {
            tokio::select! {
                cmd = self.receiver.recv() => {
                    match cmd {
                        Some(cmd) => {
                            if self.handle_command(cmd) == Flow::Stop {
                                break;
                            }
                        }
                        // Registry dropped the handle.
                        None => break,
                    }
                }
                Some(ev) = self.timer_rx.recv() => {
                    self.handle_timer(ev);
                }
            }
        }

        self.timer.cancel_all();
        tracing::info!(room = %self.room.id(), "room actor stopped");
    }

    fn handle_command(&mut self, cmd: RoomCommand) -> Flow {
        match cmd {
            RoomCommand::Join {
                player_id,
                name,
                sender,
                reply,
            } => {
                let result = self.handle_join(player_id, name, sender);
                let _ = reply.send(result);
                Flow::Continue
            }
            RoomCommand::Leave { player_id, reply } => {
                let (leave_reply, flow) = self.handle_leave(player_id);
                let _ = reply.send(leave_reply);
                flow
            }
            RoomCommand::StartGame { player_id } => {
                self.handle_start_game(player_id);
                Flow::Continue
            }
            RoomCommand::Guess { player_id, text } => {
                self.handle_guess(player_id, text);
                Flow::Continue
            }
            RoomCommand::Draw { player_id, payload } => {
                self.deliver(
                    Recipient::AllExcept(player_id),
                    ServerEvent::Draw {
                        sender: player_id,
                        payload,
                    },
                );
                Flow::Continue
            }
            RoomCommand::ClearCanvas { player_id } => {
                self.deliver(
                    Recipient::AllExcept(player_id),
                    ServerEvent::CanvasCleared { sender: player_id },
                );
                Flow::Continue
            }
            RoomCommand::Snapshot { reply } => {
                let _ = reply.send(self.room.snapshot());
                Flow::Continue
            }
        }
    }

    fn handle_join(
        &mut self,
        player_id: PlayerId,
        name: String,
        sender: OutboundSender,
    ) -> Result<RoomSnapshot, RoomError> {
        self.room.add_player(Player::new(player_id, name))?;
        self.senders.insert(player_id, sender);
        tracing::info!(
            room = %self.room.id(),
            %player_id,
            players = self.room.players().len(),
            "player joined"
        );
        let snapshot = self.room.snapshot();
        self.deliver(Recipient::All, ServerEvent::RoomUpdated {
            room: snapshot.clone(),
        });
        Ok(snapshot)
    }

    fn handle_leave(&mut self, player_id: PlayerId) -> (LeaveReply, Flow) {
        let outcome = self.room.remove_player(player_id);
        if outcome.removed {
            self.senders.remove(&player_id);
            tracing::info!(
                room = %self.room.id(),
                %player_id,
                players = self.room.players().len(),
                "player left"
            );
        }

        if outcome.now_empty {
            // Last one out turns off the lights: timers die with the room.
            self.timer.cancel_all();
            return (
                LeaveReply {
                    removed: outcome.removed,
                    now_empty: true,
                },
                Flow::Stop,
            );
        }

        if outcome.round_aborted || outcome.round_completed {
            // Either the drawer bailed (round invalidated, no winner) or
            // the departure shrank the guesser pool to completion. Both
            // end the round now and line up the next one.
            self.timer.cancel_all();
            self.deliver(Recipient::All, ServerEvent::RoundEnded {
                word: self.revealed_word(),
                players: self.room.roster(),
            });
            self.timer.schedule_next_round();
        } else if outcome.removed {
            self.deliver(Recipient::All, ServerEvent::RoomUpdated {
                room: self.room.snapshot(),
            });
        }

        (
            LeaveReply {
                removed: outcome.removed,
                now_empty: false,
            },
            Flow::Continue,
        )
    }

    fn handle_start_game(&mut self, player_id: PlayerId) {
        if self.room.host() != player_id {
            self.error_to(player_id, &GameError::NotHost(player_id));
            return;
        }
        if self.room.is_active() {
            self.deliver(
                Recipient::Player(player_id),
                ServerEvent::Error {
                    message: "game already in progress".into(),
                },
            );
            return;
        }
        self.start_round(Some(player_id));
    }

    /// Runs `start_next_round` and broadcasts its result. `requester` is
    /// the player to notify on failure; `None` for timer-driven starts,
    /// which have no one to answer.
    fn start_round(&mut self, requester: Option<PlayerId>) {
        let mut rng = rand::rng();
        match self.room.start_next_round(&self.words, &mut rng) {
            Ok(RoundOutcome::Started {
                round,
                drawer,
                word,
            }) => {
                self.deliver(Recipient::All, ServerEvent::GameStarted {
                    drawer,
                    players: self.room.roster(),
                    round,
                });
                // The word goes to the drawer alone.
                self.deliver(
                    Recipient::Player(drawer),
                    ServerEvent::YourWord { word },
                );
                self.deliver(Recipient::All, ServerEvent::Timer {
                    seconds_remaining: self.timer.round_secs(),
                });
                self.timer.start_round();
            }
            Ok(RoundOutcome::GameOver { standings }) => {
                self.timer.cancel_all();
                self.deliver(Recipient::All, ServerEvent::GameOver { players: standings });
            }
            Err(e) => match requester {
                Some(pid) => self.error_to(pid, &e),
                None => tracing::debug!(
                    room = %self.room.id(),
                    error = %e,
                    "scheduled round start failed"
                ),
            },
        }
    }

    fn handle_guess(&mut self, player_id: PlayerId, text: String) {
        match self.room.handle_guess(player_id, &text) {
            Ok(GuessOutcome::Incorrect) => {
                // Ordinary chat.
                self.deliver(Recipient::All, ServerEvent::ChatMessage {
                    sender: player_id,
                    text,
                });
            }
            Ok(GuessOutcome::Correct { round_complete, .. }) => {
                self.deliver(Recipient::All, ServerEvent::PlayerGuessed {
                    player: player_id,
                    players: self.room.roster(),
                });
                if round_complete {
                    // The room already marked the round ended; killing the
                    // countdown here, before the next inbox item, is what
                    // keeps a racing expiry from firing the no-winner path.
                    self.timer.cancel_all();
                    self.deliver(Recipient::All, ServerEvent::RoundEnded {
                        word: self.revealed_word(),
                        players: self.room.roster(),
                    });
                    self.timer.schedule_next_round();
                }
            }
            Err(e) => self.error_to(player_id, &e),
        }
    }

    fn handle_timer(&mut self, ev: TimerEvent) {
        // A stale epoch means the round this event belonged to is already
        // over — canceled, completed, or superseded. Dropping it here is
        // the race-free half of cancellation.
        if !self.timer.is_current(ev.epoch()) {
            return;
        }
        match ev {
            TimerEvent::Tick {
                seconds_remaining, ..
            } => {
                self.deliver(Recipient::All, ServerEvent::Timer { seconds_remaining });
            }
            TimerEvent::RoundExpired { .. } => {
                if !self.room.is_active() {
                    return;
                }
                self.room.abort_round();
                self.deliver(Recipient::All, ServerEvent::RoundEnded {
                    word: self.revealed_word(),
                    players: self.room.roster(),
                });
                self.timer.schedule_next_round();
            }
            TimerEvent::InterRoundElapsed { .. } => {
                self.start_round(None);
            }
        }
    }

    /// The word for an end-of-round reveal. Empty only if no round was
    /// ever started, which no reveal path can reach.
    fn revealed_word(&self) -> String {
        self.room.word().unwrap_or_default().to_string()
    }

    // -- delivery --------------------------------------------------------

    /// Fans an event out to the per-player channels named by `to`. A send
    /// to a gone receiver is ignored; the departure cleanup drops the
    /// channel shortly after.
    fn deliver(&self, to: Recipient, event: ServerEvent) {
        match to {
            Recipient::All => {
                for sender in self.senders.values() {
                    let _ = sender.send(event.clone());
                }
            }
            Recipient::Player(player_id) => {
                if let Some(sender) = self.senders.get(&player_id) {
                    let _ = sender.send(event);
                }
            }
            Recipient::AllExcept(excluded) => {
                for (pid, sender) in &self.senders {
                    if *pid != excluded {
                        let _ = sender.send(event.clone());
                    }
                }
            }
        }
    }

    fn error_to(&self, player_id: PlayerId, error: &GameError) {
        self.deliver(
            Recipient::Player(player_id),
            ServerEvent::Error {
                message: error.to_string(),
            },
        );
    }
}

/// Command channel size per room actor.
const CHANNEL_SIZE: usize = 64;

/// Spawns a room actor with the creator as host and sole member. Returns
/// the handle and the initial snapshot.
pub(crate) fn spawn_room(
    room_id: RoomId,
    creator: Player,
    creator_sender: OutboundSender,
    game_config: &GameConfig,
    timer_config: TimerConfig,
    words: WordList,
) -> (RoomHandle, RoomSnapshot) {
    let (tx, rx) = mpsc::channel(CHANNEL_SIZE);
    let (timer_tx, timer_rx) = mpsc::unbounded_channel();

    let creator_id = creator.id;
    let room = Room::new(room_id.clone(), creator, game_config);
    let snapshot = room.snapshot();

    let mut senders = HashMap::new();
    senders.insert(creator_id, creator_sender);

    let actor = RoomActor {
        room,
        words,
        timer: RoundTimer::new(timer_config, timer_tx),
        senders,
        receiver: rx,
        timer_rx,
    };

    tokio::spawn(actor.run());

    (
        RoomHandle {
            room_id,
            sender: tx,
        },
        snapshot,
    )
}
