//! TL binary wire codec.
//!
//! This crate is the object-agnostic half of `tlkit`: it knows how integers,
//! strings, vectors and flags words are laid out, and what every boxed TL
//! object must provide, but nothing about any particular schema.
//!
//! # Overview
//!
//! | Item                 | Role                                                       |
//! |----------------------|------------------------------------------------------------|
//! | [`Cursor`]           | Zero-copy reader that also tracks decode context           |
//! | [`Serializable`]     | Append the TL encoding of a value to a byte sink           |
//! | [`Deserializable`]   | Read a value (bare, or boxed for families) from a cursor   |
//! | [`Flags`]            | The inline `flags:#` presence word                         |
//! | [`TlObject`]         | Tag → shape dispatch for one logical family                |
//! | [`RemoteCall`]       | A request and the family its response belongs to           |
//! | [`Error`], [`Mode`]  | Failure taxonomy and strict/lenient reporting              |
//!
//! # Example
//!
//! ```rust
//! use tlkit_wire::{Deserializable, Mode, Serializable, TlObject};
//!
//! let bytes = vec![1i64, 2, 3].to_bytes();
//! assert_eq!(Vec::<i64>::from_bytes(&bytes).unwrap(), vec![1, 2, 3]);
//!
//! // A vector is a family too; lenient decoding never hides a bad sentinel.
//! let mut broken = bytes.clone();
//! broken[0] ^= 0xff;
//! assert!(Vec::<i64>::from_bytes_with(&broken, Mode::Lenient).is_err());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod deserialize;
pub mod error;
pub mod flags;
pub mod object;
pub mod serialize;

pub use deserialize::{Buffer, Cursor, Deserializable};
pub use error::{Error, Mode, Result};
pub use flags::Flags;
pub use object::{Identifiable, RemoteCall, TlObject, ids_unique, write_boxed};
pub use serialize::{MAX_BYTES_LEN, Serializable, write_bytes, write_vector_with};

/// `boolTrue#997275b5 = Bool;`
pub const BOOL_TRUE: u32 = 0x997275b5;

/// `boolFalse#bc799737 = Bool;`
pub const BOOL_FALSE: u32 = 0xbc799737;

/// `vector#1cb5c415 {t:Type} # [ t ] = Vector t;`
pub const VECTOR: u32 = 0x1cb5c415;

/// Bare vector: `vector` (lowercase) as opposed to the boxed `Vector`.
///
/// Used where a length-prefixed list is sent without the usual
/// `0x1cb5c415` constructor ID header.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawVec<T>(pub Vec<T>);

impl<T> From<Vec<T>> for RawVec<T> {
    fn from(v: Vec<T>) -> Self { Self(v) }
}
