use tlkit_wire::{Cursor, Deserializable, Flags, Serializable};

#[test]
fn with_sets_and_clears() {
    let f = Flags::empty().with(0, true).with(5, true).with(31, true);
    assert_eq!(f.bits(), 1 | (1 << 5) | (1 << 31));
    assert!(f.has(5));
    assert!(!f.has(4));

    let f = f.with(5, false);
    assert!(!f.has(5));
    assert!(f.has(31));
}

#[test]
fn same_bit_twice_is_idempotent() {
    // Shapes gate more than one field on a single bit; setting it twice
    // must not change the word.
    let once = Flags::empty().with(14, true);
    let twice = once.with(14, true);
    assert_eq!(once, twice);
}

#[test]
fn encoded_as_little_endian_word() {
    let f = Flags::from_bits(0x0000_0102);
    assert_eq!(f.to_bytes(), [0x02, 0x01, 0, 0]);
    assert_eq!(Flags::from_bytes(&[0x02, 0x01, 0, 0]).unwrap(), f);
}

#[test]
fn read_consumes_only_when_set() {
    let mut bytes = Vec::new();
    7i32.serialize(&mut bytes);
    "tail".to_owned().serialize(&mut bytes);

    let flags = Flags::empty().with(1, true);
    let mut cur = Cursor::from_slice(&bytes);
    let absent: Option<i64> = flags.read(0, &mut cur).unwrap();
    assert_eq!(absent, None);
    assert_eq!(cur.pos(), 0);

    let present: Option<i32> = flags.read(1, &mut cur).unwrap();
    assert_eq!(present, Some(7));
    assert_eq!(cur.read_string().unwrap(), "tail");
}

#[test]
fn unknown_bits_survive_a_roundtrip() {
    let f = Flags::from_bits(0xffff_ffff);
    assert_eq!(Flags::from_bytes(&f.to_bytes()).unwrap().bits(), 0xffff_ffff);
}
