//! Reference palette types
//!
//! This module holds the fixed thread palette the sprite is quantized
//! against, the CSV loader that builds it, nearest-color matching, and the
//! error types for parsing and validation.

mod error;
mod loader;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{nearest, Palette, PaletteEntry};
