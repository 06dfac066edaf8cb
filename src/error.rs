//! Crate-level error types.

use std::fmt;

/// Errors produced by the mapcam crate.
#[derive(Debug)]
pub enum MapCamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A 4x4 matrix column index outside `0..4`.
    ColumnOutOfRange {
        /// The rejected column index.
        index: usize,
    },
}

impl fmt::Display for MapCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ColumnOutOfRange { index } => {
                write!(f, "matrix column {index} out of range (expected 0..4)")
            }
        }
    }
}

impl std::error::Error for MapCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MapCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
