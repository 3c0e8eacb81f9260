//! Row-major RGBA pixel grid.

use crate::color::Rgba;

/// A 2-D grid of colors, addressed by `(row, col)` with the origin at the
/// top-left corner.
///
/// Pixels are stored row-major. A sprite is read-only once built.
///
/// # Example
///
/// ```
/// use dmc_quantize::{Rgba, Sprite};
///
/// let bytes = [255, 0, 0, 255, 0, 0, 0, 0];
/// let sprite = Sprite::from_rgba_bytes(2, 1, &bytes).unwrap();
///
/// assert_eq!(sprite.width(), 2);
/// assert_eq!(sprite.get(0, 0), Some(Rgba::opaque(255, 0, 0)));
/// assert!(sprite.get(0, 1).unwrap().is_transparent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    /// Pixels, one per cell, row-major order.
    pixels: Vec<Rgba>,
    /// Sprite width in pixels.
    width: usize,
    /// Sprite height in pixels.
    height: usize,
}

impl Sprite {
    /// Create a sprite from row-major pixels.
    ///
    /// Returns `None` if `pixels.len() != width * height`, or if exactly one
    /// of `width` and `height` is zero. An empty sprite is always 0x0.
    pub fn new(pixels: Vec<Rgba>, width: usize, height: usize) -> Option<Self> {
        if pixels.len() != width.checked_mul(height)? || (width == 0) != (height == 0) {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    /// Create a sprite from a flat `[R, G, B, A, R, G, B, A, ...]` buffer.
    ///
    /// Returns `None` if the buffer length is not `width * height * 4`.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width.checked_mul(height)?.checked_mul(4)? {
            return None;
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
            .collect();
        Self::new(pixels, width, height)
    }

    /// Create a sprite from nested rows.
    ///
    /// Returns `None` if the rows are ragged or all rows are empty.
    pub fn from_rows(rows: Vec<Vec<Rgba>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Self::new(rows.into_iter().flatten().collect(), width, height)
    }

    /// Returns the sprite width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the sprite height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the sprite has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the pixel at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Rgba> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        // chunks_exact(0) panics; a zero-width sprite is always 0x0
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Number of pixels with nonzero alpha.
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_transparent()).count()
    }

    /// Flatten back to `[R, G, B, A, ...]` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }
}
