//! C-style escape sequence decoding.
//!
//! Recognised escapes: `\a \b \e \f \n \r \t \v \\ \' \"`, octal `\DDD` (one to
//! three digits), `\xHH`, `\uHHHH` and `\UHHHHHHHH`. Numeric escapes name a
//! code point, which is written out UTF-8 encoded. C also has `\?` to avoid
//! trigraphs; it is not supported.

use crate::error::ConversionError;

/// Expand escape sequences and return the resulting UTF-8 bytes.
///
/// Escapes are expanded left to right without overlap. Octal escapes above
/// `0o377` and Unicode escapes that do not name a valid code point are kept
/// as literal text, backslash included. A backslash that does not start a
/// recognised escape is an error.
pub fn escape_sequence_to_bytes(escaped: &str) -> Result<Vec<u8>, ConversionError> {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let token = &rest[pos..];
        let (len, expanded) = expand_escape(token)?;
        match expanded {
            Some(c) => out.push(c),
            None => out.push_str(&token[..len]),
        }
        rest = &token[len..];
    }
    out.push_str(rest);

    Ok(out.into_bytes())
}

/// Expand the escape at the start of `token`, which begins with a backslash.
///
/// Returns the length of the escape in bytes and the character it stands for,
/// or `None` if it is out of range and must be passed through as-is.
fn expand_escape(token: &str) -> Result<(usize, Option<char>), ConversionError> {
    let body = &token[1..];
    let Some(first) = body.chars().next() else {
        return Err(ConversionError::new("Invalid escape sequence: \\"));
    };

    let simple = match first {
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'e' => Some('\x1B'),
        'f' => Some('\x0C'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\x0B'),
        '\\' | '\'' | '"' => Some(first),
        _ => None,
    };
    if simple.is_some() {
        return Ok((2, simple));
    }

    match first {
        '0'..='7' => {
            let digits = body
                .bytes()
                .take(3)
                .take_while(|b| matches!(b, b'0'..=b'7'))
                .count();
            let value = u32::from_str_radix(&body[..digits], 8)
                .map_err(|_| invalid_escape(&body[..digits]))?;
            let c = if value <= 0xFF {
                char::from_u32(value)
            } else {
                None
            };
            Ok((1 + digits, c))
        }
        'x' => expand_hex(body, 2),
        'u' => expand_hex(body, 4),
        'U' => expand_hex(body, 8),
        other => Err(invalid_escape(other.encode_utf8(&mut [0; 4]))),
    }
}

/// Expand `x`, `u` or `U` followed by exactly `width` hex digits.
fn expand_hex(body: &str, width: usize) -> Result<(usize, Option<char>), ConversionError> {
    let digits = body
        .get(1..=width)
        .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| invalid_escape(body.get(..=width).unwrap_or(body)))?;
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid_escape(digits))?;
    Ok((2 + width, char::from_u32(value)))
}

fn invalid_escape(sequence: &str) -> ConversionError {
    ConversionError::new(format!("Invalid escape sequence: \\{sequence}"))
}
