//! The [`Deserializable`] trait, [`Cursor`] buffer, and primitive impls.

use crate::error::{Error, Result};
use crate::{BOOL_FALSE, BOOL_TRUE, VECTOR};

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// A zero-copy cursor over an in-memory byte slice.
///
/// Besides the read position it remembers which family is being decoded and
/// how deep the decoder is, so errors raised anywhere below can say where
/// they happened.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    depth: usize,
    family: &'static str,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn from_slice(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0, depth: 0, family: "" }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize { self.pos }

    /// Remaining bytes.
    pub fn remaining(&self) -> usize { self.buf.len() - self.pos }

    /// How many boxed objects enclose the current position.
    pub fn depth(&self) -> usize { self.depth }

    /// Family currently being decoded, or `""` outside any object.
    pub fn family(&self) -> &'static str { self.family }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        match self.buf.get(self.pos).copied() {
            Some(b) => { self.pos += 1; Ok(b) }
            None    => Err(Error::UnexpectedEof { offset: self.pos }),
        }
    }

    /// Read exactly `out.len()` bytes.
    pub fn read_exact(&mut self, out: &mut [u8]) -> Result<()> {
        let raw = self.read_raw(out.len())?;
        out.copy_from_slice(raw);
        Ok(())
    }

    /// Borrow the next `len` bytes without copying.
    pub fn read_raw(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.buf.len())
            .ok_or(Error::UnexpectedEof { offset: self.pos })?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Skip `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.read_raw(len).map(drop)
    }

    /// Consume all remaining bytes into `out`.
    pub fn read_to_end(&mut self, out: &mut Vec<u8>) -> usize {
        let slice = &self.buf[self.pos..];
        out.extend_from_slice(slice);
        self.pos = self.buf.len();
        slice.len()
    }

    // ── Typed accessors ──────────────────────────────────────────────────────

    /// TL `int`.
    pub fn read_i32(&mut self) -> Result<i32> { i32::deserialize(self) }

    /// TL `long`.
    pub fn read_i64(&mut self) -> Result<i64> { i64::deserialize(self) }

    /// TL `double`.
    pub fn read_double(&mut self) -> Result<f64> { f64::deserialize(self) }

    /// TL `Bool`, i.e. one of the two reserved constructor ids.
    pub fn read_bool(&mut self) -> Result<bool> { bool::deserialize(self) }

    /// TL `bytes`.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> { Vec::<u8>::deserialize(self) }

    /// TL `string`.
    pub fn read_string(&mut self) -> Result<String> { String::deserialize(self) }

    /// Boxed `Vector<T>` with a caller-supplied element decoder.
    ///
    /// Stops at the first element that fails; nothing read so far is returned.
    pub fn read_vector_with<T>(
        &mut self,
        mut read: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let offset = self.pos;
        let id = u32::deserialize(self)?;
        if id != VECTOR {
            return Err(Error::BadVectorMagic { found: id, offset });
        }
        self.read_vector_body(&mut read)
    }

    /// Count + elements, without the sentinel.
    pub(crate) fn read_vector_body<T>(
        &mut self,
        read: &mut impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let offset = self.pos;
        let len = i32::deserialize(self)?;
        let len = usize::try_from(len)
            .map_err(|_| self.malformed("negative vector length", offset))?;
        // Every element takes at least four bytes except bare unit shapes;
        // the cap only bounds the up-front allocation.
        let mut out = Vec::with_capacity(len.min(self.remaining() / 4));
        for _ in 0..len {
            out.push(read(self)?);
        }
        Ok(out)
    }

    // ── Decode context ───────────────────────────────────────────────────────

    /// Run `f` one nesting level deeper, inside `family`.
    ///
    /// The previous context is restored whether `f` succeeds or not.
    pub fn descend<T>(
        &mut self,
        family: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let outer = self.family;
        self.family = family;
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        self.family = outer;
        result
    }

    /// Error for a tag the current family doesn't know.
    ///
    /// Assumes the tag was the last four bytes read from this cursor.
    pub fn unknown_constructor(&self, id: u32) -> Error {
        Error::UnknownConstructor {
            family: self.family,
            id,
            offset: self.pos.saturating_sub(4),
            depth: self.depth,
        }
    }

    /// Error for a value at `offset` that violates its field's invariant.
    pub fn malformed(&self, reason: &'static str, offset: usize) -> Error {
        Error::MalformedField { family: self.family, reason, offset, depth: self.depth }
    }
}

/// Alias used by every decode routine: `crate::deserialize::Buffer<'_, '_>`.
pub type Buffer<'a, 'b> = &'a mut Cursor<'b>;

// ─── Deserializable ──────────────────────────────────────────────────────────

/// Deserialize a value from TL binary format.
pub trait Deserializable: Sized {
    /// Read `Self` from `buf`, advancing its position.
    fn deserialize(buf: Buffer) -> Result<Self>;

    /// Convenience: deserialize from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::from_slice(bytes);
        Self::deserialize(&mut cursor)
    }
}

// ─── Primitives ───────────────────────────────────────────────────────────────

impl Deserializable for bool {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let offset = buf.pos();
        match u32::deserialize(buf)? {
            BOOL_TRUE  => Ok(true),
            BOOL_FALSE => Ok(false),
            _ => Err(buf.malformed("expected boolTrue or boolFalse", offset)),
        }
    }
}

impl Deserializable for i32 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut b = [0u8; 4];
        buf.read_exact(&mut b)?;
        Ok(i32::from_le_bytes(b))
    }
}

impl Deserializable for u32 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut b = [0u8; 4];
        buf.read_exact(&mut b)?;
        Ok(u32::from_le_bytes(b))
    }
}

impl Deserializable for i64 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut b = [0u8; 8];
        buf.read_exact(&mut b)?;
        Ok(i64::from_le_bytes(b))
    }
}

impl Deserializable for f64 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut b = [0u8; 8];
        buf.read_exact(&mut b)?;
        Ok(f64::from_le_bytes(b))
    }
}

impl Deserializable for [u8; 16] {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut b = [0u8; 16];
        buf.read_exact(&mut b)?;
        Ok(b)
    }
}

impl Deserializable for [u8; 32] {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let mut b = [0u8; 32];
        buf.read_exact(&mut b)?;
        Ok(b)
    }
}

// ─── Bytes / String ───────────────────────────────────────────────────────────

impl Deserializable for Vec<u8> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let offset = buf.pos();
        let first = buf.read_byte()?;
        let (len, header_len) = match first {
            0xfe => {
                let a = buf.read_byte()? as usize;
                let b = buf.read_byte()? as usize;
                let c = buf.read_byte()? as usize;
                (a | (b << 8) | (c << 16), 4)
            }
            0xff => return Err(buf.malformed("invalid length marker 0xff", offset)),
            short => (short as usize, 1),
        };

        let data = buf.read_raw(len)?.to_vec();

        // Skip alignment padding
        let padding = (4 - (header_len + len) % 4) % 4;
        buf.skip(padding)?;

        Ok(data)
    }
}

impl Deserializable for String {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let offset = buf.pos();
        let bytes = Vec::<u8>::deserialize(buf)?;
        String::from_utf8(bytes).map_err(|_| buf.malformed("string is not valid UTF-8", offset))
    }
}

// ─── Vectors ─────────────────────────────────────────────────────────────────

impl<T: Deserializable> Deserializable for Vec<T> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        buf.read_vector_with(T::deserialize)
    }
}

impl<T: Deserializable> Deserializable for crate::RawVec<T> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        buf.read_vector_body(&mut T::deserialize).map(crate::RawVec)
    }
}
