use tlkit_wire::{Cursor, Deserializable, Error, Serializable};

// ── Primitive round-trips ─────────────────────────────────────────────────────

#[test]
fn roundtrip_i32() {
    for v in [0i32, -1, i32::MAX, i32::MIN, 42] {
        let bytes = v.to_bytes();
        assert_eq!(i32::from_bytes(&bytes).unwrap(), v);
    }
}

#[test]
fn roundtrip_i64() {
    for v in [0i64, -1, i64::MAX, i64::MIN, 1_234_567_890] {
        let bytes = v.to_bytes();
        assert_eq!(i64::from_bytes(&bytes).unwrap(), v);
    }
}

#[test]
fn ints_are_little_endian() {
    assert_eq!(0x0403_0201i32.to_bytes(), [1, 2, 3, 4]);
    assert_eq!(0x0807_0605_0403_0201i64.to_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn roundtrip_double() {
    for v in [0.0f64, -1.5, f64::MAX, f64::MIN_POSITIVE, 55.755_826] {
        let bytes = v.to_bytes();
        assert_eq!(bytes, v.to_le_bytes());
        assert_eq!(f64::from_bytes(&bytes).unwrap(), v);
    }
}

#[test]
fn roundtrip_bool_true() {
    let bytes = true.to_bytes();
    assert_eq!(bytes, 0x997275b5u32.to_le_bytes());
    assert!(bool::from_bytes(&bytes).unwrap());
}

#[test]
fn roundtrip_bool_false() {
    let bytes = false.to_bytes();
    assert_eq!(bytes, 0xbc799737u32.to_le_bytes());
    assert!(!bool::from_bytes(&bytes).unwrap());
}

#[test]
fn bool_rejects_other_tags() {
    let err = bool::from_bytes(&1u32.to_bytes()).unwrap_err();
    assert!(matches!(err, Error::MalformedField { offset: 0, .. }), "{err:?}");
    assert!(err.is_recoverable());
}

// ── String / bytes ────────────────────────────────────────────────────────────

#[test]
fn roundtrip_empty_string() {
    let s = String::new();
    let bytes = s.to_bytes();
    assert_eq!(bytes, [0, 0, 0, 0]);
    assert_eq!(String::from_bytes(&bytes).unwrap(), s);
}

#[test]
fn roundtrip_short_string() {
    let s = "hello world".to_owned();
    let bytes = s.to_bytes();
    assert_eq!(bytes.len() % 4, 0, "must be 4-byte aligned");
    assert_eq!(String::from_bytes(&bytes).unwrap(), s);
}

#[test]
fn string_padding_by_length() {
    // (payload length, expected encoded length, long form?)
    let cases = [
        (0usize, 4usize, false),
        (3, 4, false),
        (4, 8, false),
        (253, 256, false),
        (254, 260, true),
        (300, 304, true),
    ];
    for (len, encoded, long) in cases {
        let s = "x".repeat(len);
        let bytes = s.to_bytes();
        assert_eq!(bytes.len(), encoded, "len {len}");
        if long {
            assert_eq!(bytes[0], 0xfe, "len {len}");
            assert_eq!(&bytes[1..4], &(len as u32).to_le_bytes()[..3]);
        } else {
            assert_eq!(bytes[0] as usize, len);
        }
        let header = if long { 4 } else { 1 };
        assert!(bytes[header + len..].iter().all(|&b| b == 0), "len {len}: padding");
        assert_eq!(String::from_bytes(&bytes).unwrap(), s, "len {len}");
    }
}

#[test]
fn roundtrip_bytes_vec() {
    let v: Vec<u8> = (0u8..=255).collect();
    let bytes = v.to_bytes();
    assert_eq!(Vec::<u8>::from_bytes(&bytes).unwrap(), v);
}

#[test]
fn string_rejects_invalid_utf8() {
    let bytes = vec![0xffu8, 0xfe].to_bytes();
    let err = String::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, Error::MalformedField { .. }), "{err:?}");
}

#[test]
fn bytes_reject_ff_marker() {
    let err = Vec::<u8>::from_bytes(&[0xff, 0, 0, 0]).unwrap_err();
    assert!(matches!(err, Error::MalformedField { offset: 0, .. }), "{err:?}");
}

#[test]
fn consecutive_strings_stay_aligned() {
    let mut buf = Vec::new();
    "ab".to_owned().serialize(&mut buf);
    "cdefg".to_owned().serialize(&mut buf);
    7i32.serialize(&mut buf);

    let mut cur = Cursor::from_slice(&buf);
    assert_eq!(cur.read_string().unwrap(), "ab");
    assert_eq!(cur.pos(), 4);
    assert_eq!(cur.read_string().unwrap(), "cdefg");
    assert_eq!(cur.pos(), 12);
    assert_eq!(cur.read_i32().unwrap(), 7);
    assert_eq!(cur.remaining(), 0);
}

// ── Fixed-size arrays ─────────────────────────────────────────────────────────

#[test]
fn roundtrip_int128() {
    let v: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
    assert_eq!(<[u8; 16]>::from_bytes(&v.to_bytes()).unwrap(), v);
}

#[test]
fn roundtrip_int256() {
    let v: [u8; 32] = core::array::from_fn(|i| i as u8);
    assert_eq!(<[u8; 32]>::from_bytes(&v.to_bytes()).unwrap(), v);
}

// ── Cursor EOF detection ──────────────────────────────────────────────────────

#[test]
fn deserialize_truncated_returns_eof() {
    let result = i32::from_bytes(&[0x01, 0x02]); // only 2 bytes, need 4
    assert_eq!(result, Err(Error::UnexpectedEof { offset: 0 }));
}

#[test]
fn truncated_string_payload_is_eof() {
    let mut bytes = "hello".to_owned().to_bytes();
    bytes.truncate(3);
    let err = String::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn eof_reports_read_position() {
    let mut cur = Cursor::from_slice(&[0u8; 6]);
    cur.read_i32().unwrap();
    assert_eq!(cur.read_i32(), Err(Error::UnexpectedEof { offset: 4 }));
}

// ── Option passthrough ────────────────────────────────────────────────────────

#[test]
fn option_none_writes_nothing() {
    let v: Option<i32> = None;
    assert_eq!(v.to_bytes(), b"");
}

#[test]
fn option_some_writes_inner() {
    let v: Option<i32> = Some(42);
    assert_eq!(v.to_bytes(), 42i32.to_bytes());
}

// ── encoded_size ──────────────────────────────────────────────────────────────

#[test]
fn encoded_size_matches_to_bytes_and_reuses_scratch() {
    let mut scratch = Vec::new();
    let long = "y".repeat(1000);
    assert_eq!(long.encoded_size(&mut scratch), long.to_bytes().len());
    let capacity = scratch.capacity();

    let short = "z".to_owned();
    assert_eq!(short.encoded_size(&mut scratch), 4);
    assert_eq!(scratch, short.to_bytes(), "scratch holds the last encoding");
    assert_eq!(scratch.capacity(), capacity, "scratch was not reallocated");
}
