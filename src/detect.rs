//! Input type autodetection.
//!
//! Each candidate type is guarded by a cheap regex pre-check and then
//! confirmed by running the real decoder. Candidates are tried in a fixed
//! order and the first one that decodes wins.

use crate::decode::b64::base64_to_bytes;
use crate::decode::escape::escape_sequence_to_bytes;
use crate::decode::hex::{hex_to_bytes, strip_hex_prefix};
use crate::decode::regexes::{
    BASE64URL_PATTERN, BASE64_PATTERN, ESCAPE_TOKEN_PATTERN, HEX_PATTERN,
    QUOTED_PRINTABLE_PATTERN,
};
use crate::error::ConversionError;
use crate::input_type::InputType;

/// Guess which textual encoding `input` is written in.
///
/// Order of precedence:
/// 1. hexadecimal (optional `0x` / `\x` prefix)
/// 2. Base64
/// 3. Base64URL
/// 4. C escape sequences
/// 5. quoted-printable
/// 6. ASCII
/// 7. UTF-8
///
/// A string that is both valid hex and valid Base64 is therefore reported as
/// hex. A rejected decode only moves detection on to the next candidate.
pub fn autodetect_input_type(input: &str) -> InputType {
    let hex = strip_hex_prefix(input);
    if HEX_PATTERN.is_match(hex) && can_convert(InputType::Hexadecimal, || hex_to_bytes(hex)) {
        return InputType::Hexadecimal;
    }

    if BASE64_PATTERN.is_match(input)
        && can_convert(InputType::Base64, || base64_to_bytes(input, false))
    {
        return InputType::Base64;
    }

    if BASE64URL_PATTERN.is_match(input)
        && can_convert(InputType::Base64URL, || base64_to_bytes(input, true))
    {
        return InputType::Base64URL;
    }

    if ESCAPE_TOKEN_PATTERN.is_match(input)
        && can_convert(InputType::CEscape, || escape_sequence_to_bytes(input))
    {
        return InputType::CEscape;
    }

    // quoted-printable decoding never fails, the shape is all there is to check
    if QUOTED_PRINTABLE_PATTERN.is_match(input) {
        return InputType::QuotedPrintable;
    }

    if input.is_ascii() {
        InputType::ASCII
    } else {
        InputType::UTF8
    }
}

/// Run a decoder, treating a [`ConversionError`] as "not this type".
fn can_convert<F>(candidate: InputType, decode: F) -> bool
where
    F: FnOnce() -> Result<Vec<u8>, ConversionError>,
{
    match decode() {
        Ok(_) => true,
        Err(e) => {
            log::debug!("autodetect rejected {candidate}: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexadecimal() {
        assert_eq!(autodetect_input_type("0xabc123"), InputType::Hexadecimal);
        assert_eq!(autodetect_input_type("\\xabc123"), InputType::Hexadecimal);
        assert_eq!(autodetect_input_type("abc123"), InputType::Hexadecimal);
        assert_eq!(autodetect_input_type("ab c1 23"), InputType::Hexadecimal);
    }

    #[test]
    fn test_base64() {
        assert_eq!(autodetect_input_type("bGlnaHQgd29y"), InputType::Base64);
        assert_eq!(autodetect_input_type("bGlnaHQgdw=="), InputType::Base64);
        // line wraps don't matter
        assert_eq!(autodetect_input_type("bGlna\nHQgdw=="), InputType::Base64);
        assert_eq!(autodetect_input_type("bGlna\nHQgdw==\n"), InputType::Base64);
        // "~~~~~~"
        assert_eq!(autodetect_input_type("fn5+fn5+"), InputType::Base64);
        assert_eq!(autodetect_input_type("fn5-fn5-"), InputType::Base64URL);
    }

    #[test]
    fn test_incomplete_padding_is_not_base64() {
        assert_ne!(autodetect_input_type("QQ="), InputType::Base64);
        assert_ne!(autodetect_input_type("QQ="), InputType::Base64URL);
        // the trailing = reads as a quoted-printable soft break instead
        assert_eq!(autodetect_input_type("QQ="), InputType::QuotedPrintable);
        assert_eq!(autodetect_input_type("QQ=="), InputType::Base64);
    }

    #[test]
    fn test_text() {
        assert_eq!(autodetect_input_type("abc123."), InputType::ASCII);
        assert_eq!(
            autodetect_input_type("The quick brown fox jumps over the lazy dog."),
            InputType::ASCII
        );
        assert_eq!(autodetect_input_type("."), InputType::ASCII);
        assert_eq!(autodetect_input_type("~"), InputType::ASCII);
        assert_eq!(autodetect_input_type(""), InputType::ASCII);
        assert_eq!(autodetect_input_type("✅"), InputType::UTF8);
        // outside the BMP
        assert_eq!(autodetect_input_type("👋 👋"), InputType::UTF8);
    }

    #[test]
    fn test_odd_length_hex_is_text() {
        assert_eq!(autodetect_input_type("abc12"), InputType::ASCII);
    }

    #[test]
    fn test_escape_sequences() {
        // a literal backslash-n, as if typed by the user
        assert_eq!(autodetect_input_type("abc\\n123"), InputType::CEscape);
        assert_eq!(autodetect_input_type("\\x20\\x20"), InputType::CEscape);
        assert_eq!(autodetect_input_type("caf\\u00e9 ✅"), InputType::CEscape);
        // one valid token is not enough if another backslash is invalid
        assert_eq!(autodetect_input_type("C:\\new\\path"), InputType::ASCII);
    }

    #[test]
    fn test_quoted_printable() {
        assert_eq!(autodetect_input_type("Exup=C3=A9ry"), InputType::QuotedPrintable);
        assert_eq!(
            autodetect_input_type("Line 1=\nLine2=\n"),
            InputType::QuotedPrintable
        );
        assert_eq!(autodetect_input_type("x = y"), InputType::ASCII);
    }
}
