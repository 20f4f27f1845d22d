//! Wire protocol for Scrawl.
//!
//! This crate defines the "language" that clients and the server speak:
//!
//! - **Identity** ([`PlayerId`], [`RoomId`]) — who and where.
//! - **Events** ([`ClientEvent`], [`ServerEvent`]) — everything that travels
//!   over the socket, tagged the same way the browser client names its
//!   socket events (`create-room`, `guess`, `round-ended`, ...).
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how events become bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while doing so.
//!
//! The protocol layer knows nothing about rooms, timers, or game rules —
//! it only knows how to name and serialize messages.

mod codec;
mod error;
mod events;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use events::{ClientEvent, ServerEvent};
pub use types::{PlayerId, PlayerView, Recipient, RoomId, RoomSnapshot};
