//! The inline `flags:#` word that gates optional fields.
//!
//! A shape never stores its flags word. It exposes a pure `flags()` that
//! rebuilds the word from the fields it describes, and its `serialize` writes
//! that result first:
//!
//! ```
//! use tlkit_wire::{Flags, Serializable};
//!
//! struct Profile { about: Option<String>, verified: bool }
//!
//! impl Profile {
//!     fn flags(&self) -> Flags {
//!         Flags::empty()
//!             .with(0, self.verified)
//!             .with(1, self.about.is_some())
//!     }
//! }
//!
//! impl Serializable for Profile {
//!     fn serialize(&self, buf: &mut impl Extend<u8>) {
//!         self.flags().serialize(buf);
//!         self.about.serialize(buf);
//!     }
//! }
//!
//! let p = Profile { about: Some("hi".into()), verified: true };
//! assert_eq!(p.flags().bits(), 0b11);
//! ```

use crate::deserialize::{Buffer, Deserializable};
use crate::error::Result;
use crate::serialize::Serializable;

/// A 32-bit presence mask. Bit positions are per constructor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags(u32);

impl Flags {
    /// No bits set.
    pub const fn empty() -> Self { Self(0) }

    /// Wrap a raw word.
    pub const fn from_bits(bits: u32) -> Self { Self(bits) }

    /// The raw word.
    pub const fn bits(self) -> u32 { self.0 }

    /// Set or clear `bit`.
    #[must_use]
    pub const fn with(self, bit: u32, present: bool) -> Self {
        if present { Self(self.0 | (1 << bit)) } else { Self(self.0 & !(1 << bit)) }
    }

    /// Whether `bit` is set.
    pub const fn has(self, bit: u32) -> bool {
        self.0 & (1 << bit) != 0
    }

    /// Read a `T` if `bit` is set, otherwise consume nothing.
    pub fn read<T: Deserializable>(self, bit: u32, buf: Buffer) -> Result<Option<T>> {
        if self.has(bit) { T::deserialize(buf).map(Some) } else { Ok(None) }
    }
}

impl Serializable for Flags {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.0.serialize(buf);
    }
}

impl Deserializable for Flags {
    fn deserialize(buf: Buffer) -> Result<Self> {
        u32::deserialize(buf).map(Self)
    }
}
