//! The [`Serializable`] trait and its implementations for primitive TL types.
//!
//! Encoding follows [MTProto Binary Serialization].
//!
//! [MTProto Binary Serialization]: https://core.telegram.org/mtproto/serialize

use crate::{BOOL_FALSE, BOOL_TRUE, VECTOR};

/// Longest payload the 3-byte length prefix can describe.
pub const MAX_BYTES_LEN: usize = (1 << 24) - 1;

/// Serialize `self` into TL binary format.
pub trait Serializable {
    /// Appends the serialized form of `self` to `buf`.
    fn serialize(&self, buf: &mut impl Extend<u8>);

    /// Convenience: allocate a fresh `Vec<u8>` and serialize into it.
    fn to_bytes(&self) -> Vec<u8> {
        let mut v = Vec::new();
        self.serialize(&mut v);
        v
    }

    /// Number of bytes [`serialize`](Self::serialize) would write.
    ///
    /// Measured by encoding into `scratch`, which is cleared first and left
    /// holding the encoding. Reusing one scratch buffer across calls avoids
    /// reallocating for every object.
    fn encoded_size(&self, scratch: &mut Vec<u8>) -> usize {
        scratch.clear();
        self.serialize(scratch);
        scratch.len()
    }
}

// ─── bool ────────────────────────────────────────────────────────────────────

/// `true`  → `boolTrue#997275b5`
/// `false` → `boolFalse#bc799737`
impl Serializable for bool {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let id = if *self { BOOL_TRUE } else { BOOL_FALSE };
        id.serialize(buf);
    }
}

// ─── integers ────────────────────────────────────────────────────────────────

impl Serializable for i32 {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes());
    }
}

impl Serializable for u32 {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes());
    }
}

impl Serializable for i64 {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes());
    }
}

impl Serializable for f64 {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes());
    }
}

impl Serializable for [u8; 16] {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.iter().copied());
    }
}

impl Serializable for [u8; 32] {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.iter().copied());
    }
}

// ─── strings / bytes ─────────────────────────────────────────────────────────

/// TL string encoding: a length-prefixed, 4-byte aligned byte string.
///
/// * If `len ≤ 253`: `[len as u8][data][0-padding to align to 4 bytes]`
/// * If `len ≥ 254`: `[0xfe][len as 3 LE bytes][data][0-padding]`
///
/// # Panics
///
/// If `data` is longer than [`MAX_BYTES_LEN`].
pub fn write_bytes(buf: &mut impl Extend<u8>, data: &[u8]) {
    let len = data.len();
    assert!(len <= MAX_BYTES_LEN, "TL bytes payload of {len} bytes exceeds the 3-byte length prefix");

    let header_len = if len <= 253 {
        buf.extend([len as u8]);
        1
    } else {
        buf.extend([
            0xfe,
            (len & 0xff) as u8,
            ((len >> 8) & 0xff) as u8,
            ((len >> 16) & 0xff) as u8,
        ]);
        4
    };

    let padding = (4 - (header_len + len) % 4) % 4;
    buf.extend(data.iter().copied());
    buf.extend(std::iter::repeat_n(0u8, padding));
}

impl Serializable for &[u8] {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        write_bytes(buf, self);
    }
}

impl Serializable for Vec<u8> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        write_bytes(buf, self);
    }
}

impl Serializable for String {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        write_bytes(buf, self.as_bytes());
    }
}

impl Serializable for &str {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        write_bytes(buf, self.as_bytes());
    }
}

// ─── vectors ─────────────────────────────────────────────────────────────────

/// Boxed `Vector<T>` with a caller-supplied element encoder.
///
/// Inverse of [`Cursor::read_vector_with`](crate::Cursor::read_vector_with).
pub fn write_vector_with<T, B: Extend<u8>>(
    buf: &mut B,
    items: &[T],
    mut write: impl FnMut(&T, &mut B),
) {
    VECTOR.serialize(buf);
    (items.len() as i32).serialize(buf);
    for item in items { write(item, buf); }
}

/// Boxed `Vector<T>`, prefixed with constructor ID `0x1cb5c415`.
impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        write_vector_with(buf, self, |item, buf| item.serialize(buf));
    }
}

/// Bare `vector<T>`: just a count followed by items, no constructor ID.
impl<T: Serializable> Serializable for crate::RawVec<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (self.0.len() as i32).serialize(buf);
        for item in &self.0 { item.serialize(buf); }
    }
}

// ─── Option ──────────────────────────────────────────────────────────────────

/// Optional parameters are handled by flags; when `Some`, serialize the value.
/// When `None`, nothing is written (the flags word already encodes absence).
impl<T: Serializable> Serializable for Option<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        if let Some(v) = self { v.serialize(buf); }
    }
}
