//! Single-pass pattern encoder.

use std::collections::HashMap;

use super::error::EncodeError;
use super::grid::{Cell, PatternGrid};
use super::legend::LegendEntry;
use super::symbols::SymbolAlphabet;
use crate::palette::Palette;
use crate::sprite::Sprite;

/// A finished cross-stitch pattern.
///
/// Immutable once built. The grid has the dimensions of the sprite it was
/// encoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    grid: PatternGrid,
    legend: Vec<LegendEntry>,
}

impl Pattern {
    /// The cell grid.
    #[inline]
    pub fn grid(&self) -> &PatternGrid {
        &self.grid
    }

    /// Legend entries in first-appearance order.
    #[inline]
    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Returns the pattern width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the pattern height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of stitched (non-empty) cells.
    pub fn stitch_count(&self) -> usize {
        self.grid.stitch_count()
    }

    /// Legend entry for a stitch cell.
    pub fn legend_for(&self, cell: &Cell) -> Option<&LegendEntry> {
        match cell {
            Cell::Empty => None,
            Cell::Stitch { legend_index, .. } => self.legend.get(*legend_index),
        }
    }

    /// Symbols, one string per cell, sentinel for empty cells.
    pub fn symbol_grid(&self) -> Vec<Vec<String>> {
        self.grid.render(|idx, _, _| {
            self.legend
                .get(idx)
                .map(|entry| entry.symbol.to_string())
                .unwrap_or_default()
        })
    }

    /// Source colors as `AARRGGBB` hex, sentinel for empty cells.
    pub fn real_color_grid(&self) -> Vec<Vec<String>> {
        self.grid.real_color_grid()
    }

    /// Matched palette colors as `AARRGGBB` hex, sentinel for empty cells.
    pub fn palette_color_grid(&self) -> Vec<Vec<String>> {
        self.grid.palette_color_grid()
    }
}

/// Encodes sprites against a palette.
///
/// The encoder borrows the palette and can be reused across sprites.
///
/// # Example
///
/// ```
/// use dmc_quantize::{Palette, PaletteEntry, PatternEncoder, Rgba, Sprite};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new(255, 0, 0, "Red"),
///     PaletteEntry::new(0, 0, 255, "Blue"),
/// ])
/// .unwrap();
///
/// let sprite = Sprite::from_rows(vec![vec![
///     Rgba::opaque(10, 0, 240),
///     Rgba::opaque(240, 0, 10),
/// ]])
/// .unwrap();
///
/// let pattern = PatternEncoder::new(&palette).encode(&sprite).unwrap();
/// assert_eq!(pattern.symbol_grid(), vec![vec!["A", "B"]]);
/// assert_eq!(pattern.legend()[0].label, "Blue");
/// ```
pub struct PatternEncoder<'a> {
    palette: &'a Palette,
    alphabet: SymbolAlphabet,
}

impl<'a> PatternEncoder<'a> {
    /// Create an encoder using the default `A`..`Z` alphabet.
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            alphabet: SymbolAlphabet::default(),
        }
    }

    /// Use a different symbol alphabet.
    #[inline]
    pub fn alphabet(mut self, alphabet: SymbolAlphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Encode `sprite` into a [`Pattern`].
    ///
    /// Pixels are visited in row-major order. Fully transparent pixels
    /// become [`Cell::Empty`] without being matched. Every other pixel is
    /// matched to its nearest palette entry; the first pixel matching a
    /// given label creates its legend entry with the next free symbol.
    ///
    /// The sprite is used as-is; crop it first to drop transparent borders.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::TooManyDistinctColors`] if the sprite needs
    /// more distinct threads than the alphabet has symbols. No partial
    /// pattern is returned.
    pub fn encode(&self, sprite: &Sprite) -> Result<Pattern, EncodeError> {
        let mut legend: Vec<LegendEntry> = Vec::new();
        let mut by_label: HashMap<&str, usize> = HashMap::new();
        let mut cells = Vec::with_capacity(sprite.pixels().len());

        for &pixel in sprite.pixels() {
            if pixel.is_transparent() {
                cells.push(Cell::Empty);
                continue;
            }

            let (palette_index, _) = self.palette.find_nearest(pixel);
            let entry = &self.palette.entries()[palette_index];

            let legend_index = match by_label.get(entry.label.as_str()) {
                Some(&idx) => idx,
                None => {
                    let idx = legend.len();
                    let symbol = self.alphabet.symbol(idx).ok_or_else(|| {
                        EncodeError::TooManyDistinctColors {
                            capacity: self.alphabet.capacity(),
                            label: entry.label.clone(),
                        }
                    })?;
                    legend.push(LegendEntry {
                        symbol,
                        real: pixel,
                        matched: entry.color,
                        label: entry.label.clone(),
                        description: entry.description.clone(),
                        palette_index,
                        stitch_count: 0,
                    });
                    by_label.insert(entry.label.as_str(), idx);
                    idx
                }
            };

            legend[legend_index].stitch_count += 1;
            cells.push(Cell::Stitch {
                legend_index,
                real: pixel,
                matched: entry.color,
            });
        }

        Ok(Pattern {
            grid: PatternGrid::new(cells, sprite.width(), sprite.height()),
            legend,
        })
    }
}
