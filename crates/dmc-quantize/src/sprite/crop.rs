//! Bounding-box cropping of transparent borders.

use super::Sprite;

/// Inclusive rectangle of opaque pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// First row containing an opaque pixel.
    pub top: usize,
    /// Last row containing an opaque pixel.
    pub bottom: usize,
    /// First column containing an opaque pixel.
    pub left: usize,
    /// Last column containing an opaque pixel.
    pub right: usize,
}

impl BoundingBox {
    /// Width of the box in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    /// Height of the box in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }
}

/// Compute the minimal rectangle containing every pixel with alpha != 0.
///
/// Returns `None` if the sprite has no opaque pixel at all.
pub fn bounding_box(sprite: &Sprite) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;

    for (row, pixels) in sprite.rows().enumerate() {
        for (col, pixel) in pixels.iter().enumerate() {
            if pixel.is_transparent() {
                continue;
            }
            bbox = Some(match bbox {
                None => BoundingBox {
                    top: row,
                    bottom: row,
                    left: col,
                    right: col,
                },
                Some(b) => BoundingBox {
                    top: b.top,
                    bottom: row,
                    left: b.left.min(col),
                    right: b.right.max(col),
                },
            });
        }
    }

    bbox
}

/// Crop `sprite` to the bounding box of its opaque pixels.
///
/// Pixel values inside the box are copied unchanged, including fully
/// transparent pixels that fall inside it. Returns `None` when the sprite
/// has no visible pixel, which callers report as "nothing to stitch".
///
/// # Example
///
/// ```
/// use dmc_quantize::{crop, Rgba, Sprite};
///
/// let clear = Rgba::TRANSPARENT;
/// let red = Rgba::opaque(255, 0, 0);
/// let sprite = Sprite::from_rows(vec![
///     vec![clear, clear, clear],
///     vec![clear, red, clear],
/// ])
/// .unwrap();
///
/// let cropped = crop(&sprite).unwrap();
/// assert_eq!((cropped.width(), cropped.height()), (1, 1));
/// assert_eq!(cropped.get(0, 0), Some(red));
/// ```
pub fn crop(sprite: &Sprite) -> Option<Sprite> {
    let bbox = bounding_box(sprite)?;

    let pixels = sprite
        .rows()
        .skip(bbox.top)
        .take(bbox.height())
        .flat_map(|row| row[bbox.left..=bbox.right].iter().copied())
        .collect();

    Sprite::new(pixels, bbox.width(), bbox.height())
}
