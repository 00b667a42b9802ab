//! TL entity families for the user/chat/message part of the API schema.
//!
//! Every family is a sum type in [`enums`] whose variants wrap the current
//! constructors in [`types`]. Older wire revisions live in [`layers`]; they
//! decode into the same family values, so nothing downstream needs to know
//! which revision the bytes came from. Encoding always uses the current
//! constructor.
//!
//! ```rust
//! use tlkit_schema::{enums, types};
//! use tlkit_wire::{Deserializable, Mode, Serializable, TlObject};
//!
//! let peer = enums::Peer::from(types::PeerUser { user_id: 777 });
//! let bytes = peer.to_bytes();
//! assert_eq!(enums::Peer::from_bytes(&bytes).unwrap(), peer);
//!
//! // Unknown tag: strict mode fails, lenient mode yields nothing.
//! let unknown = 0xdeadbeefu32.to_le_bytes();
//! assert!(enums::Peer::from_bytes_with(&unknown, Mode::Strict).is_err());
//! assert_eq!(enums::Peer::from_bytes_with(&unknown, Mode::Lenient).unwrap(), None);
//! ```

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

#[macro_use]
mod macros;

pub mod enums;
pub mod functions;
pub mod layers;
pub mod registry;
pub mod types;

#[cfg(feature = "name-for-id")]
pub use registry::name_for_id;

/// The API layer the canonical shapes in [`types`] correspond to.
pub const LAYER: i32 = 151;
