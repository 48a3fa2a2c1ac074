//! Quoted-printable decoding (RFC 2045, section 6.7).
//!
//! Decoding is lenient: an `=` that is neither a soft line break nor followed
//! by two hex digits is kept as literal text, so this never fails.

/// Decode quoted-printable text into bytes.
///
/// 1. trailing spaces and tabs are removed from every line
/// 2. soft line breaks (`=` before CRLF, CR, LF or the end of input) are removed
/// 3. `=HH` is replaced with the byte `0xHH`
///
/// Text outside of escapes is kept as UTF-8.
pub fn qp_to_bytes(qp: &str) -> Vec<u8> {
    let stripped = strip_trailing_whitespace(qp.as_bytes());
    let joined = remove_soft_breaks(&stripped);
    unescape(&joined)
}

fn strip_trailing_whitespace(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for &b in input {
        if matches!(b, b'\r' | b'\n') {
            trim_blanks(&mut out);
        }
        out.push(b);
    }
    trim_blanks(&mut out);
    out
}

fn trim_blanks(out: &mut Vec<u8>) {
    while matches!(out.last(), Some(b' ' | b'\t')) {
        out.pop();
    }
}

fn remove_soft_breaks(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'=' {
            match &input[i + 1..] {
                [] => break,
                [b'\r', b'\n', ..] => {
                    i += 3;
                    continue;
                }
                [b'\r' | b'\n', ..] => {
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        out.push(input[i]);
        i += 1;
    }
    out
}

fn unescape(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if let [b'=', hi, lo, ..] = input[i..] {
            if let (Some(hi), Some(lo)) = (hex_value(hi), hex_value(lo)) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(input[i]);
        i += 1;
    }
    out
}

#[inline]
fn hex_value(digit: u8) -> Option<u8> {
    char::from(digit).to_digit(16).map(|v| v as u8)
}
