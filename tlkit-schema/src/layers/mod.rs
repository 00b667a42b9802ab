//! Constructors retired by earlier layers, kept so old payloads still decode.
//!
//! Nothing here is ever written with its own tag. Each shape reads its
//! historical layout and converts into the current variant of its family,
//! so a value decoded from an old layer re-encodes as the current
//! constructor. Fields an old layer never carried end up at their defaults.
//!
//! Shapes are named after the last layer that sent them.

mod chat;
mod full;
mod media;
mod message;
mod peer;
mod reaction;
mod user;

pub use chat::*;
pub use full::*;
pub use media::*;
pub use message::*;
pub use peer::*;
pub use reaction::*;
pub use user::*;
