//! The boxed-object contract: constructor ids, tag dispatch, and requests.

use crate::deserialize::{Buffer, Cursor, Deserializable};
use crate::error::{Error, Mode, Result};
use crate::serialize::Serializable;
use crate::{BOOL_FALSE, BOOL_TRUE, VECTOR};

/// Every concrete wire shape has a unique 32-bit constructor ID.
pub trait Identifiable {
    /// The constructor ID as specified in the TL schema.
    const CONSTRUCTOR_ID: u32;
    /// The constructor's TL name, e.g. `"user"` or `"users.userFull"`.
    const NAME: &'static str;
}

/// A logical family of wire shapes that is always preceded by its tag.
///
/// Implementors are the sum types that unify every constructor, current and
/// legacy, of one TL type. [`read_params`](Self::read_params) is the
/// family's registry: it maps a tag to the shape that reads the rest.
pub trait TlObject: Sized {
    /// TL name of the family, used in diagnostics.
    const FAMILY: &'static str;

    /// Read the fields of the constructor identified by `id`.
    ///
    /// The tag itself has already been consumed from `buf`. Unknown tags fail
    /// with [`Error::UnknownConstructor`].
    fn read_params(id: u32, buf: Buffer) -> Result<Self>;

    /// Decode a whole object whose tag was already read.
    ///
    /// In [`Mode::Lenient`], an unknown constructor or malformed field
    /// anywhere inside the object yields `Ok(None)`. The cursor is then at an
    /// unspecified position and the rest of the input should be discarded.
    fn decode(tag: u32, buf: Buffer, mode: Mode) -> Result<Option<Self>> {
        let offset = buf.pos().saturating_sub(4);
        match buf.descend(Self::FAMILY, |buf| Self::read_params(tag, buf)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if !mode.is_strict() && e.is_recoverable() => {
                log::debug!("[tl] dropping {} at offset {offset}: {e}", Self::FAMILY);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Read the tag from `buf`, then [`decode`](Self::decode).
    fn decode_boxed(buf: Buffer, mode: Mode) -> Result<Option<Self>> {
        let tag = u32::deserialize(buf)?;
        Self::decode(tag, buf, mode)
    }

    /// Convenience: [`decode_boxed`](Self::decode_boxed) from a byte slice.
    fn from_bytes_with(bytes: &[u8], mode: Mode) -> Result<Option<Self>> {
        let mut cursor = Cursor::from_slice(bytes);
        Self::decode_boxed(&mut cursor, mode)
    }
}

/// Marks a function type that can be sent as an RPC call.
///
/// `Return` is the type the peer will respond with.
pub trait RemoteCall: Serializable {
    /// The deserialized response type.
    type Return: TlObject;

    /// Decode the response to this request, whose tag was already read.
    fn decode_response(&self, tag: u32, buf: Buffer, mode: Mode) -> Result<Option<Self::Return>> {
        Self::Return::decode(tag, buf, mode)
    }
}

/// Write `T`'s constructor id followed by its bare body.
pub fn write_boxed<T: Identifiable + Serializable>(value: &T, buf: &mut impl Extend<u8>) {
    T::CONSTRUCTOR_ID.serialize(buf);
    value.serialize(buf);
}

/// Check at compile time that a tag table has no duplicates.
///
/// ```
/// const TABLE: &[(u32, &str)] = &[(0x997275b5, "boolTrue"), (0xbc799737, "boolFalse")];
/// const _: () = assert!(tlkit_wire::ids_unique(TABLE));
/// ```
pub const fn ids_unique(table: &[(u32, &str)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].0 == table[j].0 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

// ─── Built-in families ────────────────────────────────────────────────────────

impl TlObject for bool {
    const FAMILY: &'static str = "Bool";

    fn read_params(id: u32, buf: Buffer) -> Result<Self> {
        match id {
            BOOL_TRUE  => Ok(true),
            BOOL_FALSE => Ok(false),
            _ => Err(buf.unknown_constructor(id)),
        }
    }
}

impl<T: Deserializable> TlObject for Vec<T> {
    const FAMILY: &'static str = "Vector";

    fn read_params(id: u32, buf: Buffer) -> Result<Self> {
        if id != VECTOR {
            return Err(Error::BadVectorMagic { found: id, offset: buf.pos().saturating_sub(4) });
        }
        buf.read_vector_body(&mut T::deserialize)
    }
}
