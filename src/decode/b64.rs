//! Base64 and Base64URL decoding.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::ConversionError;

/// Decoding rules of the "forgiving base64" algorithm used by browsers, once
/// padding has been removed by [`strip_padding`]: non-zero trailing bits are
/// ignored and any `=` left over is an error.
const FORGIVING: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::RequireNone)
    .with_decode_allow_trailing_bits(true);

static FORGIVING_ENGINE: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, FORGIVING);

/// Decode Base64, or Base64URL when `url_format` is set.
///
/// ASCII whitespace (including line wraps) is ignored. Padding is optional,
/// but if present it must bring the length to a multiple of four. The
/// URL-safe variant is decoded by translating `-` to `+` and `_` to `/`
/// first, so input that mixes both alphabets is accepted.
pub fn base64_to_bytes(base64: &str, url_format: bool) -> Result<Vec<u8>, ConversionError> {
    let cleaned: String = base64
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match (url_format, c) {
            (true, '-') => '+',
            (true, '_') => '/',
            _ => c,
        })
        .collect();

    FORGIVING_ENGINE.decode(strip_padding(&cleaned)).map_err(|e| {
        log::trace!("base64 decode failed: {e}");
        ConversionError::new(if url_format {
            "not base64url"
        } else {
            "not base64"
        })
    })
}

/// Remove one or two trailing `=`, but only from input of a length that is a
/// multiple of four.
fn strip_padding(base64: &str) -> &str {
    if base64.len() % 4 != 0 {
        return base64;
    }
    base64
        .strip_suffix("==")
        .or_else(|| base64.strip_suffix('='))
        .unwrap_or(base64)
}
