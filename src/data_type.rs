//! Classification of decoded bytes by their character semantics.

use std::fmt;

use crate::utf8::is_valid_utf8;

/// What a byte buffer looks like once decoded.
///
/// Detection tries the most restrictive classification first: printable
/// ASCII, then ASCII, then UTF-8, falling back to binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// Nothing to classify (empty buffer).
    #[default]
    Unknown,
    /// Neither ASCII nor valid UTF-8.
    Binary,
    /// Printable ASCII plus tab, LF and CR.
    ASCIIPrintable,
    /// 7-bit ASCII including control characters.
    ASCII,
    /// Valid UTF-8 containing at least one non-ASCII character.
    UTF8,
}

impl DataType {
    /// Human-readable name.
    pub const fn friendly_name(&self) -> &'static str {
        match self {
            DataType::Unknown => "Unknown",
            DataType::Binary => "Binary",
            DataType::ASCIIPrintable => "ASCII (Printable)",
            DataType::ASCII => "ASCII",
            DataType::UTF8 => "UTF-8",
        }
    }

    /// Returns true if the bytes can be shown as text without escaping
    /// anything but control characters.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            DataType::ASCIIPrintable | DataType::ASCII | DataType::UTF8
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}

/// Printable characters plus horizontal tab, LF and CR.
#[inline]
fn is_ascii_printable(b: u8) -> bool {
    matches!(b, 0x20..=0x7E | b'\t' | b'\n' | b'\r')
}

/// Classify a byte buffer.
pub fn autodetect_data_type(bytes: &[u8]) -> DataType {
    if bytes.is_empty() {
        DataType::Unknown
    } else if bytes.iter().all(|&b| is_ascii_printable(b)) {
        DataType::ASCIIPrintable
    } else if bytes.is_ascii() {
        DataType::ASCII
    } else if is_valid_utf8(bytes) {
        DataType::UTF8
    } else {
        DataType::Binary
    }
}
