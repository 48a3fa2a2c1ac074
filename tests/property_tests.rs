//! Property-based tests for b2x
//!
//! Uses proptest to check the decoders against the encoders and the UTF-8
//! validator against the standard library.

use b2x::{
    autodetect_input_type, base64_to_bytes, bytes_to_base64, bytes_to_c_escape, bytes_to_hex,
    escape_sequence_to_bytes, fix_double_encoded, hex_to_bytes, is_double_encoded_utf8,
    is_valid_utf8, InputType,
};
use proptest::prelude::*;

/// UTF-8 bytes read back as Latin-1 and encoded again.
fn double_encode(s: &str) -> Vec<u8> {
    s.bytes().map(char::from).collect::<String>().into_bytes()
}

proptest! {
    #[test]
    fn hex_round_trip(
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        spaced in any::<bool>(),
        uppercase in any::<bool>(),
    ) {
        let spacer = if spaced { " " } else { "" };
        let hex = bytes_to_hex(&bytes, spacer, uppercase);
        prop_assert_eq!(hex_to_bytes(&hex).unwrap(), bytes);
    }

    #[test]
    fn hex_output_is_detected_as_hex(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let hex = bytes_to_hex(&bytes, "", false);
        prop_assert_eq!(autodetect_input_type(&hex), InputType::Hexadecimal);
    }

    #[test]
    fn base64_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64), url in any::<bool>()) {
        let encoded = bytes_to_base64(&bytes, url);
        prop_assert_eq!(base64_to_bytes(&encoded, url).unwrap(), bytes);
    }

    // NUL is excluded: `\0` followed by a digit reads back as one octal escape
    #[test]
    fn c_escape_round_trip(s in "[^\\x00]{0,32}") {
        let literal = bytes_to_c_escape(s.as_bytes());
        let inner = &literal[1..literal.len() - 1];
        prop_assert_eq!(escape_sequence_to_bytes(inner).unwrap(), s.as_bytes());
    }

    #[test]
    fn strings_are_valid_utf8(s in any::<String>()) {
        prop_assert!(is_valid_utf8(s.as_bytes()));
    }

    #[test]
    fn validator_agrees_with_std(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        prop_assert_eq!(is_valid_utf8(&bytes), std::str::from_utf8(&bytes).is_ok());
    }

    #[test]
    fn ascii_is_never_double_encoded(s in "[\\x00-\\x7F]{0,64}") {
        prop_assert!(!is_double_encoded_utf8(s.as_bytes()));
        prop_assert!(!is_double_encoded_utf8(&double_encode(&s)));
    }

    #[test]
    fn non_ascii_double_encoding_is_detected(s in "[a-z ]{0,8}[^\\x00-\\x7F][a-z ]{0,8}") {
        prop_assert!(is_double_encoded_utf8(&double_encode(&s)));
    }

    #[test]
    fn single_encoding_is_not_detected(s in "[a-z \\x{100}-\\x{D7FF}\\x{E000}-\\x{10FFFF}]{0,16}") {
        // no code points that encode to C3 xx, so no false positives
        prop_assert!(!is_double_encoded_utf8(s.as_bytes()));
    }

    #[test]
    fn fix_double_encoded_round_trip(s in any::<String>()) {
        let fixed = fix_double_encoded(&double_encode(&s));
        prop_assert_eq!(fixed.as_deref(), Some(s.as_bytes()));
    }
}
