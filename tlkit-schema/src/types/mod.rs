//! Concrete constructors of the current layer, one `struct` each.
//!
//! Shapes encode bare: no constructor id, just the fields. Wrap one in its
//! family from [`crate::enums`] to get the tagged form.

mod chat;
mod full;
mod invite;
mod markup;
mod media;
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
pub use media::*;
pub use message::*;
pub use peer::*;
pub use photo::*;
pub use reaction::*;
pub use user::*;
