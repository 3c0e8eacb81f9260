use dmc_quantize::{PaletteError, QuantizeError};
use thiserror::Error;

/// Largest accepted sprite side, in pixels.
pub const MAX_SPRITE_SIDE: u32 = 1024;

/// Largest accepted preview cell, in pixels.
pub const MAX_PREVIEW_CELL_SIZE: u32 = 256;

/// Largest preview image, in pixels (256 MiB of RGBA).
pub const MAX_PREVIEW_PIXELS: u64 = 1 << 26;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0}")]
    Quantize(#[from] QuantizeError),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// True when the sprite had nothing visible to stitch.
    pub fn is_no_visible_content(&self) -> bool {
        matches!(self, ConvertError::Quantize(QuantizeError::NoVisibleContent))
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("Unsupported dimensions: {width}x{height} (max {max} per side)", max = MAX_SPRITE_SIDE)]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error(
        "Preview too large: {cells_wide}x{cells_high} cells at {cell_size}px (max cell {max_cell}px, max {max_pixels} pixels)",
        max_cell = MAX_PREVIEW_CELL_SIZE,
        max_pixels = MAX_PREVIEW_PIXELS
    )]
    PreviewTooLarge {
        cells_wide: usize,
        cells_high: usize,
        cell_size: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
