//! Compiled regex patterns used as cheap structural pre-checks.
//!
//! A match only means the input has the right shape; the matching decoder
//! still has the final say.

use regex::Regex;

/// Hex digits and whitespace, after any `0x` / `\x` prefix has been removed.
pub static HEX_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[a-fA-F0-9 \r\n\t]+$").expect("Invalid hex pattern")
});

/// Standard Base64 alphabet with optional padding and trailing whitespace.
pub static BASE64_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+/ \r\n\t]+=?=?[ \r\n\t]*$").expect("Invalid base64 pattern")
});

/// URL-safe Base64 alphabet with optional padding.
pub static BASE64URL_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9\-_ \r\n\t]+=?=?$").expect("Invalid base64url pattern")
});

/// A single recognised C escape token anywhere in the input.
pub static ESCAPE_TOKEN_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r#"\\(?:[abefnrtv\\'"]|[0-7]{1,3}|x[a-fA-F0-9]{2}|u[a-fA-F0-9]{4}|U[a-fA-F0-9]{8})"#)
        .expect("Invalid escape token pattern")
});

/// A quoted-printable `=HH` escape or soft line break anywhere in the input.
pub static QUOTED_PRINTABLE_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| {
        Regex::new(r"=(?:[a-fA-F0-9]{2}|\r\n?|\n|$)").expect("Invalid quoted-printable pattern")
    });
