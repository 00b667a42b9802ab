//! Property tests for the primitive codecs.

use quickcheck_macros::quickcheck;
use tlkit_wire::{Cursor, Deserializable, Flags, Serializable};

#[quickcheck]
fn int_roundtrip(v: i32) -> bool {
    i32::from_bytes(&v.to_bytes()) == Ok(v)
}

#[quickcheck]
fn long_roundtrip(v: i64) -> bool {
    i64::from_bytes(&v.to_bytes()) == Ok(v)
}

#[quickcheck]
fn double_roundtrip_is_bit_exact(v: f64) -> bool {
    f64::from_bytes(&v.to_bytes()).map(f64::to_bits) == Ok(v.to_bits())
}

#[quickcheck]
fn bytes_are_aligned_and_roundtrip(data: Vec<u8>) -> bool {
    let encoded = data.to_bytes();
    encoded.len() % 4 == 0 && Vec::<u8>::from_bytes(&encoded) == Ok(data)
}

#[quickcheck]
fn strings_roundtrip(s: String) -> bool {
    String::from_bytes(&s.to_bytes()) == Ok(s)
}

#[quickcheck]
fn vectors_roundtrip(v: Vec<i64>) -> bool {
    Vec::<i64>::from_bytes(&v.to_bytes()) == Ok(v)
}

#[quickcheck]
fn decoding_consumes_exactly_what_was_written(a: String, b: Vec<i32>, c: i64) -> bool {
    let mut buf = Vec::new();
    a.serialize(&mut buf);
    b.serialize(&mut buf);
    c.serialize(&mut buf);

    let mut cur = Cursor::from_slice(&buf);
    String::deserialize(&mut cur) == Ok(a)
        && Vec::<i32>::deserialize(&mut cur) == Ok(b)
        && i64::deserialize(&mut cur) == Ok(c)
        && cur.remaining() == 0
}

#[quickcheck]
fn flags_has_agrees_with_with(bits: u32, bit: u8, present: bool) -> bool {
    let bit = u32::from(bit % 32);
    Flags::from_bits(bits).with(bit, present).has(bit) == present
}

#[quickcheck]
fn truncation_never_panics(data: Vec<u8>, cut: usize) -> bool {
    let encoded = data.to_bytes();
    let cut = cut % (encoded.len() + 1);
    let truncated = &encoded[..cut];
    // Either a clean error or, when the cut only removed padding, a value.
    match Vec::<u8>::from_bytes(truncated) {
        Ok(v) => v == data,
        Err(e) => e.offset() <= cut,
    }
}
