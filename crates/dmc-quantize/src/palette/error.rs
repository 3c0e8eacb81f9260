//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette loading.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3, 6 or 8 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette loading and matching.
///
/// A failed load never yields a partial palette.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No entries available to match against
    EmptyPalette,
    /// The palette source is unreadable or a row is invalid
    Malformed {
        /// 1-based line number in the source (0 when the stream itself failed)
        line: usize,
        /// What was wrong with the line
        reason: String,
    },
}

impl PaletteError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        PaletteError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::Malformed { line: 0, reason } => {
                write!(f, "malformed palette: {}", reason)
            }
            PaletteError::Malformed { line, reason } => {
                write!(f, "malformed palette at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
