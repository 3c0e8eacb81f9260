//! Unified error type for the dmc-quantize public API.
//!
//! [`QuantizeError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::palette::{PaletteError, ParseColorError};
use crate::pattern::EncodeError;
use std::fmt;

/// Unified error type for the dmc-quantize public API.
///
/// # Example
///
/// ```
/// use dmc_quantize::{Palette, QuantizeError};
///
/// fn load(csv: &str) -> Result<Palette, QuantizeError> {
///     let palette = Palette::load(csv.as_bytes())?;
///     Ok(palette)
/// }
///
/// assert!(matches!(load("Floss,R,G,B\n"), Err(QuantizeError::Palette(_))));
/// ```
#[derive(Debug)]
pub enum QuantizeError {
    /// Palette could not be loaded (malformed or empty)
    Palette(PaletteError),
    /// Pattern could not be encoded (symbol alphabet exhausted or invalid)
    Encode(EncodeError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// The image has no pixel with nonzero alpha
    NoVisibleContent,
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::Palette(err) => write!(f, "palette error: {}", err),
            QuantizeError::Encode(err) => write!(f, "encode error: {}", err),
            QuantizeError::ParseColor(err) => write!(f, "color parse error: {}", err),
            QuantizeError::NoVisibleContent => write!(f, "image has no visible pixels"),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Palette(err) => Some(err),
            QuantizeError::Encode(err) => Some(err),
            QuantizeError::ParseColor(err) => Some(err),
            QuantizeError::NoVisibleContent => None,
        }
    }
}

impl From<PaletteError> for QuantizeError {
    fn from(err: PaletteError) -> Self {
        QuantizeError::Palette(err)
    }
}

impl From<EncodeError> for QuantizeError {
    fn from(err: EncodeError) -> Self {
        QuantizeError::Encode(err)
    }
}

impl From<ParseColorError> for QuantizeError {
    fn from(err: ParseColorError) -> Self {
        QuantizeError::ParseColor(err)
    }
}
