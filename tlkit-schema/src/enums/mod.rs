//! Logical families as sum types, one per TL type.
//!
//! Each family owns its constructor registry: decoding reads the tag and
//! dispatches to the matching shape, current or legacy. See
//! [`TlObject`](tlkit_wire::TlObject).

mod chat;
mod full;
mod invite;
mod markup;
mod message;
mod peer;
mod photo;
mod reaction;
mod user;

pub mod messages;
pub mod users;

pub use chat::*;
pub use full::*;
pub use invite::*;
pub use markup::*;
pub use message::*;
pub use peer::*;
pub use photo::*;
pub use reaction::*;
pub use user::*;
