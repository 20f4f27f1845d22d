//! Room lifecycle management for Scrawl.
//!
//! Each room runs as an isolated Tokio task (actor model) owning its
//! [`Room`](scrawl_game::Room) state and its
//! [`RoundTimer`](scrawl_timer::RoundTimer). All operations on a room —
//! joins, leaves, guesses, timer ticks, the inter-round continuation —
//! flow through that one task, so transitions on the same room never
//! interleave while different rooms proceed fully in parallel.
//!
//! # Key types
//!
//! - [`RoomRegistry`] — creates/destroys rooms, routes players to them
//! - [`RoomHandle`] — send commands to a running room actor
//! - [`RoomError`] — room-level failures, wrapping the game rules' errors

mod actor;
mod error;
mod registry;

pub use actor::{LeaveReply, OutboundSender, RoomHandle};
pub use error::RoomError;
pub use registry::RoomRegistry;
