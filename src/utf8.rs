//! UTF-8 validation and double-encoding detection.
//!
//! Both checks work directly on the byte map from
//! <https://en.wikipedia.org/wiki/UTF-8#Byte_map> rather than going through a
//! platform decoder, so the exact set of accepted sequences is visible here.

/// Returns true for a UTF-8 continuation byte (`0x80..=0xBF`).
#[inline]
pub const fn is_continuation(b: u8) -> bool {
    matches!(b, 0x80..=0xBF)
}

/// Check that `bytes` is well-formed UTF-8.
///
/// Overlong encodings, UTF-16 surrogates, code points above U+10FFFF, stray
/// continuation bytes and truncated sequences are all rejected. Noncharacters
/// such as U+FFFE, U+FFFF and U+10FFFF are accepted: this checks encoding
/// well-formedness, not character assignment.
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        let width = match sequence_width(&bytes[i..]) {
            Some(width) => width,
            None => return false,
        };
        i += width;
    }
    true
}

/// Length of the well-formed sequence at the start of `rest`, if there is one.
fn sequence_width(rest: &[u8]) -> Option<usize> {
    let lead = *rest.first()?;
    // only the second byte can have a range narrower than 0x80..=0xBF
    let (width, second) = match lead {
        0x00..=0x7F => return Some(1),
        0xC2..=0xDF => (2, 0x80..=0xBF),
        0xE0 => (3, 0xA0..=0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80..=0xBF),
        0xED => (3, 0x80..=0x9F),
        0xF0 => (4, 0x90..=0xBF),
        0xF1..=0xF3 => (4, 0x80..=0xBF),
        0xF4 => (4, 0x80..=0x8F),
        // 0x80..=0xBF without a leader, and 0xC0, 0xC1, 0xF5..=0xFF which
        // never appear in valid UTF-8
        _ => return None,
    };

    let seq = rest.get(..width)?;
    if second.contains(&seq[1]) && seq[2..].iter().all(|&b| is_continuation(b)) {
        Some(width)
    } else {
        None
    }
}

/// Look for the signature of UTF-8 text that was decoded as Latin-1/CP1252
/// and then encoded to UTF-8 a second time.
///
/// Each byte `0x80..=0xFF` of the original text turns into `C2 xx` or `C3 xx`,
/// so a multi-byte sequence shows up as `C3 xx C2 xx [C2 xx [C2 xx]]`. The
/// ranges mirror the leading/second byte rules of [`is_valid_utf8`]. See
/// <https://blogs.perl.org/users/chansen/2010/10/coping-with-double-encoded-utf-8.html>.
///
/// This is a heuristic: it reports the first signature found and does not
/// prove the whole buffer is double-encoded.
pub fn is_double_encoded_utf8(bytes: &[u8]) -> bool {
    bytes
        .windows(4)
        .enumerate()
        .any(|(i, window)| matches_signature(window, &bytes[i..]))
}

fn matches_signature(window: &[u8], rest: &[u8]) -> bool {
    let &[0xC3, b1, 0xC2, b3] = window else {
        return false;
    };

    // originally a 2 byte sequence, C2..DF xx
    if matches!(b1, 0x82..=0x9F) && is_continuation(b3) {
        return true;
    }

    // originally 3 bytes, E0..EF xx xx
    let Some(&[0xC2, b5]) = rest.get(4..6) else {
        return false;
    };
    let three = match b1 {
        0xA0 => matches!(b3, 0xA0..=0xBF),
        0xA1..=0xAC | 0xAE..=0xAF => is_continuation(b3),
        0xAD => matches!(b3, 0x80..=0x9F),
        _ => false,
    };
    if three && is_continuation(b5) {
        return true;
    }

    // originally 4 bytes, F0..F4 xx xx xx
    let Some(&[0xC2, b7]) = rest.get(6..8) else {
        return false;
    };
    let four = match b1 {
        0xB0 => matches!(b3, 0x90..=0xBF),
        0xB1..=0xB3 => is_continuation(b3),
        0xB4 => matches!(b3, 0x80..=0x8F),
        _ => false,
    };
    four && is_continuation(b5) && is_continuation(b7)
}
