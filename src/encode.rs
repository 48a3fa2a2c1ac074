//! Encoders from bytes to a textual representation.
//!
//! Every encoder is total: any byte buffer can be exported in every format.

use std::borrow::Cow;

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;

use crate::copy_type::CopyType;
use crate::utf8::is_valid_utf8;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Decode bytes as UTF-8 text.
///
/// A leading byte order mark is kept as U+FEFF rather than stripped, so no
/// input byte is lost. Invalid sequences are replaced with U+FFFD.
pub fn bytes_to_utf8(bytes: &[u8]) -> Cow<'_, str> {
    match simdutf8::basic::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => String::from_utf8_lossy(bytes),
    }
}

/// Encode bytes as padded Base64, or padded Base64URL when `url_format` is set.
pub fn bytes_to_base64(bytes: &[u8], url_format: bool) -> String {
    if url_format {
        URL_SAFE.encode(bytes)
    } else {
        STANDARD.encode(bytes)
    }
}

/// Encode bytes as hex digits, with `spacer` between each byte.
pub fn bytes_to_hex(bytes: &[u8], spacer: &str, uppercase: bool) -> String {
    let digits = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
    let mut out = String::with_capacity(bytes.len() * (2 + spacer.len()));
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(spacer);
        }
        push_hex_byte(&mut out, b, digits);
    }
    out
}

/// Render bytes as an array literal: `[0x41, 0x42, 0x43]`.
pub fn bytes_to_hex_array(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 6);
    out.push('[');
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str("0x");
        push_hex_byte(&mut out, b, LOWER_DIGITS);
    }
    out.push(']');
    out
}

/// Render bytes as a PostgreSQL `bytea` hex literal: `\x414243`.
pub fn bytes_to_postgres_bytea(bytes: &[u8]) -> String {
    format!("\\x{}", bytes_to_hex(bytes, "", false))
}

#[inline]
fn push_hex_byte(out: &mut String, b: u8, digits: &[u8; 16]) {
    out.push(char::from(digits[usize::from(b >> 4)]));
    out.push(char::from(digits[usize::from(b & 0x0F)]));
}

/// Render bytes as a double-quoted C string literal.
///
/// Valid UTF-8 is escaped one code point at a time, so non-ASCII characters
/// become `\x`, `\u` or `\U` escapes; anything else is escaped one byte at
/// a time.
///
/// NUL is written as `\0`, as in C. A digit right after it would be read back
/// as part of the same octal escape: `[0x00, b'1']` renders as `"\01"`.
pub fn bytes_to_c_escape(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    if is_valid_utf8(bytes) {
        for c in bytes_to_utf8(bytes).chars() {
            push_escaped(&mut out, u32::from(c));
        }
    } else {
        for &b in bytes {
            push_escaped(&mut out, u32::from(b));
        }
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, c: u32) {
    match c {
        // octal escape
        0x00 => out.push_str("\\0"),
        0x08 => out.push_str("\\b"),
        0x09 => out.push_str("\\t"),
        0x0A => out.push_str("\\n"),
        0x0B => out.push_str("\\v"),
        0x0C => out.push_str("\\f"),
        0x0D => out.push_str("\\r"),
        0x22 => out.push_str("\\\""),
        0x27 => out.push_str("\\'"),
        0x5C => out.push_str("\\\\"),
        0x20..=0x7E => out.push(char::from(c as u8)),
        0x00..=0xFF => out.push_str(&format!("\\x{c:02x}")),
        0x100..=0xFFFF => out.push_str(&format!("\\u{c:04x}")),
        _ => out.push_str(&format!("\\U{c:08x}")),
    }
}

/// Export bytes in the representation named by `copy_type`.
pub fn export_data(copy_type: CopyType, data: &[u8]) -> String {
    match copy_type {
        CopyType::UTF8 => bytes_to_utf8(data).into_owned(),
        CopyType::Base64 => bytes_to_base64(data, false),
        CopyType::Base64URL => bytes_to_base64(data, true),
        CopyType::LowerHex => bytes_to_hex(data, "", false),
        CopyType::UpperHex => bytes_to_hex(data, "", true),
        CopyType::LowerHexSpace => bytes_to_hex(data, " ", false),
        CopyType::UpperHexSpace => bytes_to_hex(data, " ", true),
        CopyType::HexArray => bytes_to_hex_array(data),
        CopyType::PostgresBytea => bytes_to_postgres_bytea(data),
        CopyType::CEscape => bytes_to_c_escape(data),
    }
}
