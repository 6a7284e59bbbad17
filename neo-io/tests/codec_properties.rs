use neo_io::{var_size, IoError, MemoryReader, NeoRead, NeoWrite};
use proptest::prelude::*;

proptest! {
    #[test]
    fn varint_is_minimal_and_reversible(value in any::<u64>()) {
        let mut buf = Vec::new();
        buf.write_varint(value);
        prop_assert_eq!(buf.len(), var_size(value));

        let mut reader = MemoryReader::new(&buf);
        prop_assert_eq!(reader.read_varint(u64::MAX).unwrap(), value);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn var_bytes_reversible(data in proptest::collection::vec(any::<u8>(), 0..600)) {
        let mut buf = Vec::new();
        buf.write_var_bytes(&data);
        let mut reader = MemoryReader::new(&buf);
        prop_assert_eq!(reader.read_var_bytes(1024).unwrap(), data);
    }

    #[test]
    fn var_string_reversible(text in "\\PC{0,64}") {
        let mut buf = Vec::new();
        buf.write_var_string(&text);
        let mut reader = MemoryReader::new(&buf);
        prop_assert_eq!(reader.read_var_string(1024).unwrap(), text);
    }

    #[test]
    fn push_data_reversible(data in proptest::collection::vec(any::<u8>(), 0..1_000)) {
        let mut buf = Vec::new();
        buf.write_push_data(&data).unwrap();
        let mut reader = MemoryReader::new(&buf);
        prop_assert_eq!(reader.read_push_data().unwrap(), data);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn truncated_input_never_panics(data in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut reader = MemoryReader::new(&data);
        let _ = reader.read_push_data();
        let mut reader = MemoryReader::new(&data);
        let _ = reader.read_var_string(16);
        let mut reader = MemoryReader::new(&data);
        match reader.read_var_bytes(u64::MAX) {
            Ok(bytes) => prop_assert!(bytes.len() < data.len()),
            Err(err) => prop_assert!(matches!(
                err,
                IoError::Truncated { .. } | IoError::LimitExceeded { .. }
            ), "unexpected error: {:?}", err),
        }
    }
}
