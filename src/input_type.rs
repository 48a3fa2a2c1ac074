use std::fmt;

/// Textual encoding an input string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InputType {
    /// Not yet detected.
    #[default]
    #[cfg_attr(feature = "cli", value(skip))]
    Unknown,
    /// 7-bit ASCII text.
    #[cfg_attr(feature = "cli", value(name = "ascii"))]
    ASCII,
    /// UTF-8 text.
    #[cfg_attr(feature = "cli", value(name = "utf8", alias = "utf-8"))]
    UTF8,
    /// C-style backslash escape sequences, e.g. `\x41\n`.
    #[cfg_attr(feature = "cli", value(name = "cescape"))]
    CEscape,
    /// Hexadecimal digits, optionally prefixed with `0x` or `\x`.
    #[cfg_attr(feature = "cli", value(name = "hex", alias = "hexadecimal"))]
    Hexadecimal,
    /// Standard Base64 alphabet.
    #[cfg_attr(feature = "cli", value(name = "base64"))]
    Base64,
    /// URL-safe Base64 alphabet (`-` and `_`).
    #[cfg_attr(feature = "cli", value(name = "base64url"))]
    Base64URL,
    /// MIME quoted-printable.
    #[cfg_attr(feature = "cli", value(name = "qp", alias = "quoted-printable"))]
    QuotedPrintable,
}

impl InputType {
    /// Human-readable name, suitable for display next to a converted value.
    pub const fn friendly_name(&self) -> &'static str {
        match self {
            InputType::Unknown => "Unknown",
            InputType::ASCII => "ASCII",
            InputType::UTF8 => "UTF-8",
            InputType::CEscape => "C-like Escape Sequence",
            InputType::Hexadecimal => "Hexadecimal",
            InputType::Base64 => "Base 64",
            InputType::Base64URL => "Base 64 URL",
            InputType::QuotedPrintable => "Quoted Printable",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}
