//! Legend entries: one per distinct matched thread.

use crate::color::Rgba;

/// One row of the pattern legend.
///
/// Created the first time a thread label is matched during encoding, in
/// row-major scan order. `real` is the source color of that first pixel;
/// later pixels matching the same thread may differ from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Symbol drawn in every cell stitched with this thread
    pub symbol: char,
    /// Source color of the first pixel that matched this thread
    pub real: Rgba,
    /// Palette color of the thread
    pub matched: Rgba,
    /// Thread label, e.g. a DMC floss number
    pub label: String,
    /// Thread name from the palette, when it has one
    pub description: Option<String>,
    /// Position of the thread in the palette
    pub palette_index: usize,
    /// Number of cells stitched with this thread
    pub stitch_count: usize,
}

impl LegendEntry {
    /// Real color as `#AARRGGBB`.
    pub fn real_hex(&self) -> String {
        self.real.to_string()
    }

    /// Matched palette color as `#AARRGGBB`.
    pub fn matched_hex(&self) -> String {
        self.matched.to_string()
    }
}
