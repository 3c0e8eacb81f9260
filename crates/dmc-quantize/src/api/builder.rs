//! StitchPatterner builder, the primary entry point for the crate.

use super::error::QuantizeError;
use crate::pattern::{Pattern, PatternEncoder, SymbolAlphabet};
use crate::palette::Palette;
use crate::sprite::{crop, Sprite};

/// Turns sprites into cross-stitch patterns.
///
/// Owns the palette and symbol alphabet. [`convert`](Self::convert) takes
/// `&self`, so one patterner can process many sprites.
///
/// # Example
///
/// ```
/// use dmc_quantize::{Palette, PaletteEntry, Rgba, Sprite, StitchPatterner};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new(255, 0, 0, "Red"),
///     PaletteEntry::new(0, 0, 255, "Blue"),
/// ])
/// .unwrap();
///
/// let image = Sprite::from_rows(vec![
///     vec![Rgba::new(250, 10, 10, 255)],
///     vec![Rgba::TRANSPARENT],
/// ])
/// .unwrap();
///
/// let pattern = StitchPatterner::new(palette).convert(&image).unwrap();
/// assert_eq!(pattern.symbol_grid(), vec![vec!["A"]]);
/// ```
#[derive(Debug, Clone)]
pub struct StitchPatterner {
    palette: Palette,
    alphabet: SymbolAlphabet,
}

impl StitchPatterner {
    /// Create a patterner with the default `A`..`Z` alphabet.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            alphabet: SymbolAlphabet::default(),
        }
    }

    /// Set the symbol alphabet.
    #[inline]
    pub fn alphabet(mut self, alphabet: SymbolAlphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// The palette used for matching.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The symbol alphabet in use.
    #[inline]
    pub fn symbols(&self) -> &SymbolAlphabet {
        &self.alphabet
    }

    /// Crop `image` to its visible pixels and encode the result.
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::NoVisibleContent`] if every pixel has alpha 0.
    ///   Nothing is encoded in that case.
    /// - [`QuantizeError::Encode`] if the alphabet runs out of symbols.
    pub fn convert(&self, image: &Sprite) -> Result<Pattern, QuantizeError> {
        let cropped = crop(image).ok_or(QuantizeError::NoVisibleContent)?;
        let pattern = PatternEncoder::new(&self.palette)
            .alphabet(self.alphabet.clone())
            .encode(&cropped)?;
        Ok(pattern)
    }
}
