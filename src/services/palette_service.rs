use std::fs::File;
use std::path::Path;

use dmc_quantize::{Palette, PaletteError};

/// Load the thread palette from a CSV file.
///
/// A file that cannot be opened is reported as a malformed palette at
/// line 0, the same category as an unreadable stream.
pub fn load_palette(path: &Path, label_column: Option<&str>) -> Result<Palette, PaletteError> {
    let file = File::open(path).map_err(|e| PaletteError::Malformed {
        line: 0,
        reason: format!("cannot open {}: {}", path.display(), e),
    })?;

    let palette = match label_column {
        Some(column) => Palette::load_with_label(file, column),
        None => Palette::load(file),
    };

    match &palette {
        Ok(p) => tracing::info!(path = %path.display(), entries = p.len(), "Loaded palette"),
        Err(e) => tracing::warn!(path = %path.display(), %e, "Failed to load palette"),
    }

    palette
}
