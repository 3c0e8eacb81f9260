//! PNG decoding of sprites and PNG encoding of pattern previews.

use std::io::Cursor;
use std::path::Path;

use dmc_quantize::{Cell, Pattern, Rgba, Sprite};

use crate::error::{
    ExportError, ImageError, MAX_PREVIEW_CELL_SIZE, MAX_PREVIEW_PIXELS, MAX_SPRITE_SIDE,
};
use crate::models::ColorSource;

/// Grid line color inside a 10x10 block
const GRID_MINOR: Rgba = Rgba::opaque(0xC0, 0xC0, 0xC0);
/// Grid line color every 10 cells
const GRID_MAJOR: Rgba = Rgba::opaque(0x40, 0x40, 0x40);
/// Smallest cell size that gets grid lines
const GRID_MIN_CELL: u32 = 4;

/// Read and decode a PNG sprite from disk.
pub fn decode_sprite_file(path: &Path) -> Result<Sprite, ImageError> {
    let bytes = std::fs::read(path)?;
    decode_sprite(&bytes)
}

/// Decode PNG bytes into an RGBA sprite.
///
/// Every PNG color type is accepted. Palette and low bit depth images are
/// expanded, tRNS chunks become alpha, 16-bit channels are reduced to 8 bit,
/// and images without alpha get alpha 255.
pub fn decode_sprite(bytes: &[u8]) -> Result<Sprite, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    if width > MAX_SPRITE_SIDE || height > MAX_SPRITE_SIDE {
        return Err(ImageError::UnsupportedDimensions { width, height });
    }

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    let data = &buf[..frame.buffer_size()];

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::Decode(format!(
            "unexpected bit depth after expansion: {:?}",
            frame.bit_depth
        )));
    }

    let rgba: Vec<u8> = match frame.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(ImageError::Decode(
                "indexed image was not expanded".to_string(),
            ))
        }
    };

    tracing::debug!(
        width,
        height,
        color_type = ?frame.color_type,
        "Decoded sprite"
    );

    Sprite::from_rgba_bytes(width as usize, height as usize, &rgba)
        .ok_or_else(|| ImageError::Decode("pixel buffer does not match dimensions".to_string()))
}

/// Render a pattern as a PNG chart.
///
/// Each cell becomes a `cell_size` x `cell_size` square painted with the
/// real or matched color. Empty cells stay transparent. From
/// `cell_size >= 4` on, 1-pixel grid lines are drawn along the top and left
/// edge of each cell, darker every 10 cells.
///
/// Cells larger than `MAX_PREVIEW_CELL_SIZE` or images above
/// `MAX_PREVIEW_PIXELS` are refused with `ExportError::PreviewTooLarge`.
pub fn encode_preview(
    pattern: &Pattern,
    colors: ColorSource,
    cell_size: u32,
) -> Result<Vec<u8>, ExportError> {
    let cell_size = cell_size.max(1);
    let (width, height) = preview_size(pattern, cell_size)?;
    let grid = cell_size >= GRID_MIN_CELL;

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        let row = (y / cell_size) as usize;
        for x in 0..width {
            let col = (x / cell_size) as usize;
            let color = if grid && (y % cell_size == 0 || x % cell_size == 0) {
                let major = (y % cell_size == 0 && row % 10 == 0)
                    || (x % cell_size == 0 && col % 10 == 0);
                if major {
                    GRID_MAJOR
                } else {
                    GRID_MINOR
                }
            } else {
                match pattern.grid().get(row, col) {
                    Some(Cell::Stitch { real, matched, .. }) => match colors {
                        ColorSource::Real => *real,
                        ColorSource::Dmc => *matched,
                    },
                    _ => Rgba::TRANSPARENT,
                }
            };
            pixels.extend_from_slice(&color.to_bytes());
        }
    }

    encode_rgba_png(width, height, &pixels)
}

/// Pixel size of the preview, checked against the preview limits.
fn preview_size(pattern: &Pattern, cell_size: u32) -> Result<(u32, u32), ExportError> {
    let too_large = || ExportError::PreviewTooLarge {
        cells_wide: pattern.width(),
        cells_high: pattern.height(),
        cell_size,
    };
    if cell_size > MAX_PREVIEW_CELL_SIZE {
        return Err(too_large());
    }

    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|c| c.checked_mul(cell_size))
    };
    let (width, height) = side(pattern.width())
        .zip(side(pattern.height()))
        .ok_or_else(too_large)?;

    if u64::from(width) * u64::from(height) > MAX_PREVIEW_PIXELS {
        return Err(too_large());
    }
    Ok((width, height))
}

/// Encode 8-bit RGBA pixel data as a PNG.
fn encode_rgba_png(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(pixels)
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
