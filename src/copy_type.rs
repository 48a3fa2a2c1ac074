use std::fmt;

/// Textual representation to export a byte buffer as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CopyType {
    /// Bytes decoded as UTF-8 text.
    #[default]
    #[cfg_attr(feature = "cli", value(name = "utf8"))]
    UTF8,
    /// Standard Base64 with padding.
    #[cfg_attr(feature = "cli", value(name = "base64"))]
    Base64,
    /// URL-safe Base64 with padding.
    #[cfg_attr(feature = "cli", value(name = "base64url"))]
    Base64URL,
    /// `48656c6c6f`
    #[cfg_attr(feature = "cli", value(name = "lowerhex"))]
    LowerHex,
    /// `48656C6C6F`
    #[cfg_attr(feature = "cli", value(name = "upperhex"))]
    UpperHex,
    /// `48 65 6c 6c 6f`
    #[cfg_attr(feature = "cli", value(name = "lowerhexspace"))]
    LowerHexSpace,
    /// `48 65 6C 6C 6F`
    #[cfg_attr(feature = "cli", value(name = "upperhexspace"))]
    UpperHexSpace,
    /// `[0x48, 0x65, 0x6c]`
    #[cfg_attr(feature = "cli", value(name = "hexarray"))]
    HexArray,
    /// `\x48656c6c6f`
    #[cfg_attr(feature = "cli", value(name = "postgresbytea"))]
    PostgresBytea,
    /// A double-quoted C string literal.
    #[cfg_attr(feature = "cli", value(name = "cescape"))]
    CEscape,
}

impl CopyType {
    /// Short identifier, as accepted on the command line.
    pub const fn id(&self) -> &'static str {
        match self {
            CopyType::UTF8 => "utf8",
            CopyType::Base64 => "base64",
            CopyType::Base64URL => "base64url",
            CopyType::LowerHex => "lowerhex",
            CopyType::UpperHex => "upperhex",
            CopyType::LowerHexSpace => "lowerhexspace",
            CopyType::UpperHexSpace => "upperhexspace",
            CopyType::HexArray => "hexarray",
            CopyType::PostgresBytea => "postgresbytea",
            CopyType::CEscape => "cescape",
        }
    }
}

impl fmt::Display for CopyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CopyType::default().to_string(), "utf8");
        assert_eq!(CopyType::PostgresBytea.to_string(), "postgresbytea");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_value_names_match_ids() {
        use clap::ValueEnum;

        for t in CopyType::value_variants() {
            let value = t.to_possible_value().unwrap();
            assert_eq!(value.get_name(), t.id());
            assert_eq!(CopyType::from_str(t.id(), false), Ok(*t));
        }
        assert_eq!(
            CopyType::from_str("PostgresBytea", true),
            Ok(CopyType::PostgresBytea)
        );
        assert!(CopyType::from_str("base32", false).is_err());
    }
}
