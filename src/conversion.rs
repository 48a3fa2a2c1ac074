use std::fmt;

use crate::data_type::DataType;
use crate::encoding::legacy_encoding_hint;
use crate::input_type::InputType;

/// The result of converting one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// How the input was interpreted.
    pub input_type: InputType,
    /// Whether `input_type` was autodetected rather than forced.
    pub detected: bool,
    /// Whether decoding failed and the raw text bytes were used instead.
    pub fell_back: bool,
    /// The decoded bytes (after repair, if any).
    pub bytes: Vec<u8>,
    /// What the decoded bytes look like.
    pub data_type: DataType,
    /// Whether the decoded bytes looked double-encoded.
    pub double_encoded: bool,
    /// Whether a round of double encoding was undone.
    pub repaired: bool,
    /// The bytes rendered in the requested copy format.
    pub output: String,
}

impl Conversion {
    /// Number of decoded bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of UTF-8 characters in the decoded bytes.
    ///
    /// Counts every byte that is not a continuation byte, so it is only
    /// meaningful when `data_type` is textual.
    pub fn char_count(&self) -> usize {
        bytecount::num_chars(&self.bytes)
    }

    /// chardetng's guess at the legacy encoding of non-UTF-8 bytes.
    pub fn legacy_encoding(&self) -> Option<&'static str> {
        legacy_encoding_hint(&self.bytes)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}
