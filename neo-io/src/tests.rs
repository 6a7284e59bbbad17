use hex_literal::hex;

use super::*;

#[test]
fn varint_roundtrip() {
    let numbers = [
        0u64,
        0xFC,
        0xFD,
        0xFFFF,
        0x1_0000,
        0xFFFF_FFFF,
        0x1_0000_0000,
        u64::MAX,
    ];

    for value in numbers {
        let mut buf = Vec::new();
        write_varint(&mut buf, value);
        assert_eq!(buf.len(), var_size(value));
        let mut reader = MemoryReader::new(buf.as_slice());
        assert_eq!(read_varint(&mut reader).unwrap(), value);
        assert_eq!(reader.remaining(), 0);
    }
}

#[test]
fn varint_boundary_encodings() {
    let cases: [(u64, &[u8]); 6] = [
        (0xFC, &hex!("fc")),
        (0xFD, &hex!("fdfd00")),
        (0xFFFF, &hex!("fdffff")),
        (0x1_0000, &hex!("fe00000100")),
        (0xFFFF_FFFF, &hex!("feffffffff")),
        (0x1_0000_0000, &hex!("ff0000000001000000")),
    ];

    for (value, expected) in cases {
        let mut buf = Vec::new();
        write_varint(&mut buf, value);
        assert_eq!(buf, expected, "value {value:#x}");
    }
}

#[test]
fn varint_accepts_non_minimal_forms() {
    let mut reader = MemoryReader::new(&hex!("fd0100"));
    assert_eq!(read_varint(&mut reader).unwrap(), 1);

    let mut reader = MemoryReader::new(&hex!("ff0500000000000000"));
    assert_eq!(read_varint(&mut reader).unwrap(), 5);
}

#[test]
fn varint_truncated_prefix() {
    let mut reader = MemoryReader::new(&hex!("fe0102"));
    let err = read_varint(&mut reader).unwrap_err();
    assert_eq!(err, IoError::Truncated { needed: 4, remaining: 2 });
    assert_eq!(err.kind(), ErrorKind::Truncated);
}

#[test]
fn varint_limit() {
    let mut reader = MemoryReader::new(&hex!("fd0001"));
    let err = reader.read_varint(0xFF).unwrap_err();
    assert_eq!(err, IoError::LimitExceeded { len: 0x100, max: 0xFF });
    assert_eq!(err.kind(), ErrorKind::LimitExceeded);
}

#[test]
fn bool_encoding() {
    let mut buf = Vec::new();
    true.neo_encode(&mut buf);
    false.neo_encode(&mut buf);
    let mut reader = MemoryReader::new(buf.as_slice());
    assert!(bool::neo_decode(&mut reader).unwrap());
    assert!(!bool::neo_decode(&mut reader).unwrap());

    let mut reader = MemoryReader::new(&[2]);
    assert_eq!(reader.read_bool().unwrap_err(), IoError::InvalidValue("bool"));
}

#[test]
fn fixed_width_little_endian() {
    let mut writer = BinaryWriter::new();
    writer.write_u16(0x0102);
    writer.write_i32(-2);
    writer.write_u64(0x0102_0304_0506_0708);
    assert_eq!(
        writer.as_bytes(),
        hex!("0201feffffff0807060504030201").as_slice()
    );

    let bytes = writer.into_bytes();
    let mut reader = MemoryReader::new(&bytes);
    assert_eq!(reader.read_u16().unwrap(), 0x0102);
    assert_eq!(reader.read_i32().unwrap(), -2);
    assert_eq!(reader.read_u64().unwrap(), 0x0102_0304_0506_0708);
    assert!(reader.is_empty());
    assert!(matches!(reader.read_u8(), Err(IoError::Truncated { needed: 1, remaining: 0 })));
}

#[test]
fn string_roundtrip() {
    let message = "neo-n3-rust";
    let mut buf = Vec::new();
    message.neo_encode(&mut buf);
    assert_eq!(buf.len(), message.size());
    let mut reader = MemoryReader::new(buf.as_slice());
    let decoded = String::neo_decode(&mut reader).unwrap();
    assert_eq!(message, decoded);
}

#[test]
fn var_string_rejects_invalid_utf8() {
    let mut reader = MemoryReader::new(&hex!("02c328"));
    let err = reader.read_var_string(16).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
}

#[test]
fn var_bytes_declared_length_beyond_input() {
    let mut reader = MemoryReader::new(&hex!("05aabb"));
    let err = reader.read_var_bytes(16).unwrap_err();
    assert_eq!(err, IoError::Truncated { needed: 5, remaining: 2 });
}

#[test]
fn fixed_string_padding() {
    let mut buf = Vec::new();
    buf.write_fixed_string("neon", 8).unwrap();
    assert_eq!(buf, b"neon\0\0\0\0");

    let mut reader = MemoryReader::new(&buf);
    assert_eq!(reader.read_fixed_string(8).unwrap(), "neon");

    let mut reader = MemoryReader::new(b"ne\0n\0\0\0\0");
    assert!(reader.read_fixed_string(8).is_err());

    let err = Vec::new().write_fixed_string("too long", 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LimitExceeded);
}

#[test]
fn push_data_prefixes() {
    let cases = [(0usize, 1usize), (0x4B, 1), (0x4C, 2), (0xFF, 2), (0x100, 3), (0x1_0000, 5)];
    for (len, prefix) in cases {
        let data = vec![0xAB; len];
        let mut buf = Vec::new();
        buf.write_push_data(&data).unwrap();
        assert_eq!(buf.len(), prefix + len, "len {len}");
        assert_eq!(push_data_size(len), buf.len());

        let mut reader = MemoryReader::new(&buf);
        assert_eq!(reader.read_push_data().unwrap(), data);
        assert!(reader.is_empty());
    }
}

#[test]
fn push_data_marker_bytes() {
    let mut buf = Vec::new();
    buf.write_push_data(&[0u8; 0x4C]).unwrap();
    assert_eq!(&buf[..2], &[0x4C, 0x4C]);

    let mut buf = Vec::new();
    buf.write_push_data(&[0u8; 0x100]).unwrap();
    assert_eq!(&buf[..3], &[0x4D, 0x00, 0x01]);
}

#[test]
fn push_data_malformed() {
    let mut reader = MemoryReader::new(&hex!("4f00"));
    let err = reader.read_push_data().unwrap_err();
    assert_eq!(err, IoError::MalformedPushData(0x4F));
    assert_eq!(err.kind(), ErrorKind::MalformedInput);

    let mut reader = MemoryReader::new(&hex!("4c10aabb"));
    let err = reader.read_push_data().unwrap_err();
    assert_eq!(err, IoError::Truncated { needed: 0x10, remaining: 2 });

    let mut reader = MemoryReader::new(&hex!("4d01"));
    assert_eq!(reader.read_push_data().unwrap_err().kind(), ErrorKind::Truncated);
}

#[test]
fn array_helpers() {
    let items: Vec<u16> = vec![1, 2, 0xFFFF];
    let mut buf = Vec::new();
    encode_array(&items, &mut buf);
    assert_eq!(buf, hex!("0301000200ffff"));

    let mut reader = MemoryReader::new(&buf);
    let decoded: Vec<u16> = decode_array(&mut reader, 3).unwrap();
    assert_eq!(decoded, items);

    let mut reader = MemoryReader::new(&buf);
    let err = decode_array::<u16, _>(&mut reader, 2).unwrap_err();
    assert_eq!(err, IoError::LimitExceeded { len: 3, max: 2 });
}

#[test]
fn from_array_rejects_trailing_bytes() {
    assert_eq!(u16::from_array(&hex!("0100")).unwrap(), 1);
    assert_eq!(u16::from_array(&hex!("010000")).unwrap_err(), IoError::TrailingBytes(1));
}

#[test]
fn reader_position_tracking() {
    let data = hex!("0102030405");
    let mut reader = MemoryReader::new(&data);
    assert_eq!(reader.peek(), Some(1));
    assert_eq!(reader.read_slice(2).unwrap(), &[1, 2]);
    assert_eq!(reader.position(), 2);
    assert_eq!(reader.rest(), &[3, 4, 5]);
    assert!(reader.read_slice(4).is_err());
    assert_eq!(reader.position(), 2);
}
