//! Hexadecimal decoding.

use super::regexes::HEX_PATTERN;
use crate::error::ConversionError;

/// Remove a leading `0x` or `\x` (Postgres bytea) prefix, if any.
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("\\x"))
        .unwrap_or(hex)
}

/// Decode hexadecimal digits into bytes.
///
/// Accepts an optional `0x` or `\x` prefix and whitespace anywhere between
/// digits. Fails if anything else is present or if the number of digits is
/// odd.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, ConversionError> {
    let hex = strip_hex_prefix(hex);
    if !HEX_PATTERN.is_match(hex) {
        return Err(ConversionError::new("not hex"));
    }

    // remove whitespace before checking the length
    let digits: Vec<u8> = hex
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if digits.len() % 2 != 0 {
        return Err(ConversionError::new("not hex (odd length)"));
    }

    digits
        .chunks_exact(2)
        .map(|pair| -> Result<u8, ConversionError> {
            Ok((nibble(pair[0])? << 4) | nibble(pair[1])?)
        })
        .collect()
}

#[inline]
fn nibble(digit: u8) -> Result<u8, ConversionError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(ConversionError::new("not hex")),
    }
}
