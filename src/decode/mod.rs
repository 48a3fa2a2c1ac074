//! Decoders from a textual representation to bytes.
//!
//! Each decoder either consumes its whole input or fails with a
//! [`ConversionError`]; none of them returns a partial buffer.

pub mod b64;
pub mod escape;
pub mod hex;
pub mod quoted_printable;
pub mod regexes;

use crate::error::ConversionError;
use crate::input_type::InputType;

/// Decode `input` with the decoder for `input_type`.
///
/// Text types (`ASCII`, `UTF8`, `Unknown`) are returned as their UTF-8 bytes.
pub fn try_input_to_bytes(input: &str, input_type: InputType) -> Result<Vec<u8>, ConversionError> {
    match input_type {
        InputType::CEscape => escape::escape_sequence_to_bytes(input),
        InputType::Hexadecimal => hex::hex_to_bytes(input),
        InputType::Base64 => b64::base64_to_bytes(input, false),
        InputType::Base64URL => b64::base64_to_bytes(input, true),
        InputType::QuotedPrintable => Ok(quoted_printable::qp_to_bytes(input)),
        InputType::Unknown | InputType::ASCII | InputType::UTF8 => Ok(input.as_bytes().to_vec()),
    }
}

/// Decode `input` with the decoder for `input_type`, falling back to the
/// UTF-8 bytes of the text if it does not decode.
///
/// This always produces something to display; use [`try_input_to_bytes`]
/// to find out whether the decode actually succeeded.
pub fn input_to_bytes(input: &str, input_type: InputType) -> Vec<u8> {
    decode_with_fallback(input, input_type).0
}

/// Same as [`input_to_bytes`], also reporting whether the fallback was used.
pub(crate) fn decode_with_fallback(input: &str, input_type: InputType) -> (Vec<u8>, bool) {
    match try_input_to_bytes(input, input_type) {
        Ok(bytes) => (bytes, false),
        Err(e) => {
            log::warn!("error decoding input as {input_type}, falling back to text: {e}");
            (input.as_bytes().to_vec(), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        assert_eq!(input_to_bytes("414243", InputType::Hexadecimal), b"ABC");
        assert_eq!(input_to_bytes("QUJD", InputType::Base64), b"ABC");
        assert_eq!(input_to_bytes("QUJD", InputType::Base64URL), b"ABC");
        assert_eq!(input_to_bytes(r"\x41BC", InputType::CEscape), b"ABC");
        assert_eq!(input_to_bytes("=41BC", InputType::QuotedPrintable), b"ABC");
        assert_eq!(input_to_bytes("ABC", InputType::ASCII), b"ABC");
        assert_eq!(input_to_bytes("✅", InputType::UTF8), "✅".as_bytes());
        assert_eq!(input_to_bytes("ABC", InputType::Unknown), b"ABC");
    }

    #[test]
    fn test_fallback_to_text() {
        assert_eq!(input_to_bytes("12345", InputType::Hexadecimal), b"12345");
        assert_eq!(input_to_bytes("z", InputType::Base64), b"z");
        assert_eq!(input_to_bytes(r"C:\path", InputType::CEscape), br"C:\path");

        assert!(try_input_to_bytes("12345", InputType::Hexadecimal).is_err());
    }
}
