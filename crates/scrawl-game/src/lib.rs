//! The Scrawl game state machine.
//!
//! Everything in this crate is synchronous and side-effect free: a [`Room`]
//! is a plain value, and every operation on it returns a tagged result the
//! caller can match on exhaustively. The async world (actors, timers,
//! sockets) lives in `scrawl-room` and `scrawl` — this crate only knows the
//! rules of the game:
//!
//! - membership ([`Room::add_player`], [`Room::remove_player`])
//! - drawer rotation and round progression ([`Room::start_next_round`])
//! - guess evaluation and scoring ([`Room::handle_guess`])
//!
//! # Key types
//!
//! - [`Room`] — the aggregate root, one per game instance
//! - [`RoundOutcome`] / [`GuessOutcome`] / [`LeaveOutcome`] — transition results
//! - [`GameError`] — every way an operation can be refused
//! - [`WordList`] — the fixed pool of secret words

mod config;
mod error;
mod player;
mod room;
mod words;

pub use config::GameConfig;
pub use error::GameError;
pub use player::Player;
pub use room::{GuessOutcome, LeaveOutcome, Room, RoundOutcome};
pub use words::WordList;
