//! Double-encoding repair and legacy encoding hints using `encoding_rs` and
//! chardetng.

use chardetng::EncodingDetector;
use simdutf8::basic::from_utf8;

use crate::utf8::is_valid_utf8;

/// Undo one round of double encoding.
///
/// `data` must be UTF-8 text whose characters each stand for a single byte,
/// either as Latin-1 (U+0000..U+00FF) or as a windows-1252 character such as
/// `€` (U+20AC, byte 0x80). Those bytes must in turn form valid UTF-8.
/// Returns `None` if any of that does not hold.
pub fn fix_double_encoded(data: &[u8]) -> Option<Vec<u8>> {
    let text = from_utf8(data).ok()?;
    let bytes = text
        .chars()
        .map(single_byte)
        .collect::<Option<Vec<u8>>>()?;
    is_valid_utf8(&bytes).then_some(bytes)
}

/// The byte a character was decoded from by a Latin-1 or windows-1252 reader.
fn single_byte(c: char) -> Option<u8> {
    if let Ok(b) = u8::try_from(c) {
        return Some(b);
    }
    let mut buf = [0; 4];
    let (encoded, _, had_errors) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut buf));
    match (&*encoded, had_errors) {
        (&[b], false) => Some(b),
        _ => None,
    }
}

/// Guess the legacy single- or multi-byte encoding of data that is not UTF-8.
///
/// Returns the WHATWG name of chardetng's best guess, or `None` when the
/// data is already valid UTF-8.
pub fn legacy_encoding_hint(data: &[u8]) -> Option<&'static str> {
    if is_valid_utf8(data) {
        return None;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    let encoding = detector.guess(None, true);
    Some(encoding.name())
}
