//! b2x: convert between textual encodings of bytes
//!
//! Paste hex, Base64, Base64URL, C escape sequences, quoted-printable or plain
//! text, and b2x works out which one it is, decodes it and renders the bytes
//! in any other format.
//!
//! # Quick Start
//!
//! ```
//! use b2x::{Converter, CopyType, DataType, InputType};
//!
//! let mut converter = Converter::new();
//! converter.copy_type(CopyType::HexArray);
//!
//! let conversion = converter.convert("0x414243");
//! assert_eq!(conversion.input_type, InputType::Hexadecimal);
//! assert_eq!(conversion.data_type, DataType::ASCIIPrintable);
//! assert_eq!(conversion.output, "[0x41, 0x42, 0x43]");
//! ```
//!
//! # Building Blocks
//!
//! Every step of a conversion is also available on its own:
//!
//! ```
//! use b2x::{autodetect_input_type, export_data, input_to_bytes, CopyType, InputType};
//!
//! let input = "caf\\u00e9";
//! let input_type = autodetect_input_type(input);
//! assert_eq!(input_type, InputType::CEscape);
//!
//! let bytes = input_to_bytes(input, input_type);
//! assert_eq!(export_data(CopyType::UTF8, &bytes), "café");
//! assert_eq!(export_data(CopyType::Base64, &bytes), "Y2Fmw6k=");
//! ```
//!
//! # Autodetection
//!
//! Candidates are tried in a fixed order: hexadecimal, Base64, Base64URL,
//! C escape sequences, quoted-printable, ASCII and finally UTF-8. Each one
//! must pass a structural check and then decode without error, so ambiguous
//! input resolves to the earliest type in that list.

mod conversion;
mod converter;
mod copy_type;
mod data_type;
pub mod decode;
mod detect;
pub mod encode;
mod encoding;
mod error;
mod input_type;
mod utf8;

pub use conversion::Conversion;
pub use converter::Converter;
pub use copy_type::CopyType;
pub use data_type::{autodetect_data_type, DataType};
pub use decode::{input_to_bytes, try_input_to_bytes};
pub use detect::autodetect_input_type;
pub use encode::export_data;
pub use error::{ConversionError, Error, Result};
pub use input_type::InputType;
pub use utf8::{is_double_encoded_utf8, is_valid_utf8};

// Re-export for advanced usage
pub use decode::b64::base64_to_bytes;
pub use decode::escape::escape_sequence_to_bytes;
pub use decode::hex::hex_to_bytes;
pub use decode::quoted_printable::qp_to_bytes;
pub use encode::{
    bytes_to_base64, bytes_to_c_escape, bytes_to_hex, bytes_to_hex_array,
    bytes_to_postgres_bytea, bytes_to_utf8,
};
pub use encoding::{fix_double_encoded, legacy_encoding_hint};
