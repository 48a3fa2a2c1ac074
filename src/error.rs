use std::io;
use thiserror::Error;

/// The input does not conform to the encoding it was claimed to be in.
///
/// Decoders return this when they reject their input. Autodetection treats it
/// as "try the next candidate", so it is kept separate from [`Error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ConversionError {
    reason: String,
}

impl ConversionError {
    /// Create a new conversion error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason the input was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Error type for conversions that read their input from a file or reader.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading the input.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be decoded as the requested type.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Empty file or no data.
    #[error("Empty input")]
    EmptyInput,
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
