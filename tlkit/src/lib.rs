//! # tlkit: TL binary serialization
//!
//! `tlkit` reads and writes the TL binary format used by the Telegram API.
//! It is split into two focused sub-crates wired together here for
//! convenience:
//!
//! | Sub-crate      | Role                                                         |
//! |----------------|--------------------------------------------------------------|
//! | `tlkit-wire`   | Primitive codecs, flags words, vectors, errors, decode modes |
//! | `tlkit-schema` | Entity families, their registries and legacy layer shapes    |
//!
//! ## Quick start
//!
//! ```rust
//! use tlkit::{Deserializable, Mode, Serializable, TlObject};
//! use tlkit::schema::{enums, functions, types};
//!
//! // Requests encode boxed, ready for the transport.
//! let req = functions::users::GetUsers { id: vec![types::InputUserSelf.into()] };
//! let _wire = req.to_bytes();
//!
//! // Responses decode through their family; lenient mode turns an unknown
//! // constructor anywhere inside into `None` instead of an error.
//! let user: enums::User = types::UserEmpty { id: 1 }.into();
//! let bytes = vec![user.clone()].to_bytes();
//! let users = Vec::<enums::User>::from_bytes_with(&bytes, Mode::Lenient).unwrap();
//! assert_eq!(users, Some(vec![user]));
//! ```
//!
//! ## Older layers
//!
//! Payloads produced by earlier API layers decode into the same values as
//! current ones; see [`schema::layers`]. Values always re-encode with the
//! current constructor.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`tlkit_wire`]: the object-agnostic codec.
pub use tlkit_wire as wire;

/// Re-export of [`tlkit_schema`]: families, shapes, requests.
pub use tlkit_schema as schema;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use tlkit_wire::{
    Cursor,
    Deserializable,
    Error,
    Flags,
    Identifiable,
    Mode,
    RemoteCall,
    Result,
    Serializable,
    TlObject,
};

pub use tlkit_schema::LAYER;

#[cfg(feature = "name-for-id")]
pub use tlkit_schema::name_for_id;
