//! Converter builder and convert methods.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::conversion::Conversion;
use crate::copy_type::CopyType;
use crate::data_type::autodetect_data_type;
use crate::decode::{decode_with_fallback, try_input_to_bytes};
use crate::detect::autodetect_input_type;
use crate::encode::export_data;
use crate::encoding::fix_double_encoded;
use crate::error::{Error, Result};
use crate::input_type::InputType;
use crate::utf8::is_double_encoded_utf8;

/// Converts textual encodings of bytes into other textual encodings.
///
/// # Example
///
/// ```
/// use b2x::{Converter, CopyType, InputType};
///
/// let mut converter = Converter::new();
/// converter.copy_type(CopyType::LowerHexSpace);
///
/// let conversion = converter.convert("SGVsbG8=");
/// assert_eq!(conversion.input_type, InputType::Base64);
/// assert_eq!(conversion.output, "48 65 6c 6c 6f");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    /// Optional forced input type.
    forced_input_type: Option<InputType>,
    /// Output representation.
    copy_type: CopyType,
    /// Undo one round of double encoding when detected.
    repair_double_encoding: bool,
    /// Strip trailing CR/LF from read input.
    trim_trailing_newline: bool,
    /// Propagate decode errors from readers instead of falling back.
    strict: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Create a new Converter with default settings.
    pub fn new() -> Self {
        Self {
            forced_input_type: None,
            copy_type: CopyType::UTF8,
            repair_double_encoding: false,
            trim_trailing_newline: true,
            strict: false,
        }
    }

    /// Force a specific input type (skip autodetection).
    pub fn input_type(&mut self, input_type: InputType) -> &mut Self {
        self.forced_input_type = Some(input_type);
        self
    }

    /// Go back to autodetecting the input type.
    pub fn autodetect(&mut self) -> &mut Self {
        self.forced_input_type = None;
        self
    }

    /// Set the output representation.
    pub fn copy_type(&mut self, copy_type: CopyType) -> &mut Self {
        self.copy_type = copy_type;
        self
    }

    /// Replace double-encoded UTF-8 with the singly encoded original.
    pub fn repair_double_encoding(&mut self, yes: bool) -> &mut Self {
        self.repair_double_encoding = yes;
        self
    }

    /// Strip trailing line breaks from input read by
    /// [`convert_reader`](Self::convert_reader) and [`convert_path`](Self::convert_path).
    pub fn trim_trailing_newline(&mut self, yes: bool) -> &mut Self {
        self.trim_trailing_newline = yes;
        self
    }

    /// Make [`convert_reader`](Self::convert_reader) and
    /// [`convert_path`](Self::convert_path) fail on input that does not decode.
    pub fn strict(&mut self, yes: bool) -> &mut Self {
        self.strict = yes;
        self
    }

    /// The input type `input` will be decoded as.
    pub fn detect(&self, input: &str) -> InputType {
        self.forced_input_type
            .unwrap_or_else(|| autodetect_input_type(input))
    }

    /// Convert text, falling back to its raw bytes if it does not decode.
    pub fn convert(&self, input: &str) -> Conversion {
        let input_type = self.detect(input);
        let (bytes, fell_back) = decode_with_fallback(input, input_type);
        self.build_conversion(input_type, bytes, fell_back)
    }

    /// Convert text, failing if it does not decode as its input type.
    pub fn convert_strict(&self, input: &str) -> Result<Conversion> {
        let input_type = self.detect(input);
        let bytes = try_input_to_bytes(input, input_type)?;
        Ok(self.build_conversion(input_type, bytes, false))
    }

    /// Convert the text in a file at the given path.
    pub fn convert_path<P: AsRef<Path>>(&self, path: P) -> Result<Conversion> {
        let file = File::open(path.as_ref())?;
        self.convert_reader(BufReader::new(file))
    }

    /// Convert text from a reader.
    ///
    /// The input must be UTF-8; anything else is reported as an I/O error.
    pub fn convert_reader<R: Read>(&self, mut reader: R) -> Result<Conversion> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let input = if self.trim_trailing_newline {
            text.trim_end_matches(['\r', '\n'])
        } else {
            text.as_str()
        };

        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        if self.strict {
            self.convert_strict(input)
        } else {
            Ok(self.convert(input))
        }
    }

    fn build_conversion(
        &self,
        input_type: InputType,
        bytes: Vec<u8>,
        fell_back: bool,
    ) -> Conversion {
        let double_encoded = is_double_encoded_utf8(&bytes);

        let (bytes, repaired) = if self.repair_double_encoding && double_encoded {
            match fix_double_encoded(&bytes) {
                Some(fixed) => (fixed, true),
                None => {
                    log::debug!("double encoding detected but could not be undone");
                    (bytes, false)
                }
            }
        } else {
            (bytes, false)
        };

        let data_type = autodetect_data_type(&bytes);
        let output = export_data(self.copy_type, &bytes);

        Conversion {
            input_type,
            detected: self.forced_input_type.is_none(),
            fell_back,
            bytes,
            data_type,
            double_encoded,
            repaired,
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType;
    use std::io::Cursor;

    #[test]
    fn test_convert_autodetects() {
        let conversion = Converter::new().convert("48656c6c6f");

        assert_eq!(conversion.input_type, InputType::Hexadecimal);
        assert!(conversion.detected);
        assert!(!conversion.fell_back);
        assert_eq!(conversion.bytes, b"Hello");
        assert_eq!(conversion.data_type, DataType::ASCIIPrintable);
        assert_eq!(conversion.output, "Hello");
    }

    #[test]
    fn test_forced_input_type_falls_back() {
        let mut converter = Converter::new();
        converter.input_type(InputType::Hexadecimal);

        let conversion = converter.convert("12345");
        assert_eq!(conversion.input_type, InputType::Hexadecimal);
        assert!(!conversion.detected);
        assert!(conversion.fell_back);
        assert_eq!(conversion.output, "12345");

        assert!(matches!(
            converter.convert_strict("12345"),
            Err(Error::Conversion(_))
        ));

        converter.autodetect();
        assert_eq!(converter.detect("12345"), InputType::ASCII);
    }

    #[test]
    fn test_copy_type() {
        let mut converter = Converter::new();
        converter
            .copy_type(CopyType::PostgresBytea)
            .input_type(InputType::ASCII);
        assert_eq!(converter.convert("ABC").output, "\\x414243");

        // unforced, "ABC" is short unpadded Base64
        converter.autodetect();
        assert_eq!(converter.convert("ABC").output, "\\x0010");
    }

    #[test]
    fn test_double_encoding_repair() {
        // "é" double encoded: C3 83 C2 A9
        let input = "\u{C3}\u{A9}";

        let plain = Converter::new().convert(input);
        assert!(plain.double_encoded);
        assert!(!plain.repaired);
        assert_eq!(plain.output, "Ã©");

        let mut converter = Converter::new();
        converter.repair_double_encoding(true);
        let repaired = converter.convert(input);
        assert!(repaired.double_encoded);
        assert!(repaired.repaired);
        assert_eq!(repaired.bytes, "é".as_bytes());
        assert_eq!(repaired.data_type, DataType::UTF8);
    }

    #[test]
    fn test_convert_reader_trims_newline() {
        let conversion = Converter::new()
            .convert_reader(Cursor::new("QUJD\r\n"))
            .unwrap();
        assert_eq!(conversion.input_type, InputType::Base64);
        assert_eq!(conversion.output, "ABC");

        let mut converter = Converter::new();
        converter
            .trim_trailing_newline(false)
            .input_type(InputType::UTF8);
        let conversion = converter.convert_reader(Cursor::new("abc\n")).unwrap();
        assert_eq!(conversion.output, "abc\n");
    }

    #[test]
    fn test_convert_reader_empty() {
        let converter = Converter::new();
        assert!(matches!(
            converter.convert_reader(Cursor::new("")),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            converter.convert_reader(Cursor::new("\n\n")),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_convert_reader_not_utf8() {
        let result = Converter::new().convert_reader(Cursor::new(vec![0xFF, 0xFE]));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_convert_reader_strict() {
        let mut converter = Converter::new();
        converter.input_type(InputType::Base64).strict(true);
        assert!(converter.convert_reader(Cursor::new("!!!")).is_err());

        converter.strict(false);
        let conversion = converter.convert_reader(Cursor::new("!!!")).unwrap();
        assert!(conversion.fell_back);
        assert_eq!(conversion.output, "!!!");
    }

    #[test]
    fn test_convert_path_missing() {
        let result = Converter::new().convert_path("/nonexistent/input.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
