//! Palette struct with ordered entries and nearest-color matching.
//!
//! This module provides the core `Palette` type: an immutable, ordered list
//! of thread colors. Order matters: it decides which entry wins when two
//! entries are equally close to a pixel.

use std::io::Read;

use super::error::PaletteError;
use super::loader;
use crate::color::Rgba;

/// One thread color of the reference palette.
///
/// Palette colors are always fully opaque (alpha 255).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Channel values of the thread
    pub color: Rgba,
    /// Label that identifies the thread (the DMC floss number)
    pub label: String,
    /// Optional human-readable name, e.g. "Salmon Very Light"
    pub description: Option<String>,
}

impl PaletteEntry {
    /// Create an opaque entry from RGB channels and a label.
    pub fn new(r: u8, g: u8, b: u8, label: impl Into<String>) -> Self {
        Self {
            color: Rgba::opaque(r, g, b),
            label: label.into(),
            description: None,
        }
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A fixed, ordered reference palette.
///
/// Built once, never mutated. Construction rejects empty input, so a
/// `Palette` always has at least one entry to match against.
///
/// # Example
///
/// ```
/// use dmc_quantize::{Palette, PaletteEntry, Rgba};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new(255, 0, 0, "Red"),
///     PaletteEntry::new(0, 0, 255, "Blue"),
/// ])
/// .unwrap();
///
/// let entry = palette.nearest(Rgba::new(250, 10, 10, 255));
/// assert_eq!(entry.label, "Red");
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette from in-memory entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `entries` is empty.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { entries })
    }

    /// Load a palette from CSV text.
    ///
    /// The first line is a header. Channel columns are found by name
    /// (`R`/`Red`, `G`/`Green`, `B`/`Blue`), the label column is the first of
    /// `Floss`, `Floss#`, `DMC`, `Label`, and an optional `Description` or
    /// `Name` column is kept. Every entry gets alpha 255.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::Malformed`] if a required column is missing, a row is
    ///   short, a label is empty, or a channel is not an integer in 0..=255.
    ///   Stream read failures are reported the same way with line 0.
    /// - [`PaletteError::EmptyPalette`] if there are no data rows.
    ///
    /// # Example
    ///
    /// ```
    /// use dmc_quantize::Palette;
    ///
    /// let csv = "Floss,Description,R,G,B\n310,Black,0,0,0\nB5200,Snow White,255,255,255\n";
    /// let palette = Palette::load(csv.as_bytes()).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert_eq!(palette.get(1).unwrap().label, "B5200");
    /// ```
    pub fn load<R: Read>(reader: R) -> Result<Self, PaletteError> {
        Self::new(loader::parse(reader, None)?)
    }

    /// Load a palette from CSV text using an explicit label column name.
    pub fn load_with_label<R: Read>(reader: R, label_column: &str) -> Result<Self, PaletteError> {
        Self::new(loader::parse(reader, Some(label_column))?)
    }

    /// Returns the number of entries in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: This always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&PaletteEntry> {
        self.entries.get(idx)
    }

    /// All entries in source order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Iterate over entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Find the first entry with the given label.
    pub fn find_by_label(&self, label: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Find the nearest palette entry to `color`.
    ///
    /// Returns `(index, squared_distance)`. Distance is Euclidean over all
    /// four channels, alpha included. The scan is linear and uses a strict
    /// `<`, so among equally distant entries the earliest one wins.
    #[inline]
    pub fn find_nearest(&self, color: Rgba) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, entry) in self.entries.iter().enumerate() {
            let dist = color.distance_squared(entry.color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Return the nearest palette entry to `color`.
    ///
    /// See [`Palette::find_nearest`] for the tie-break rule.
    #[inline]
    pub fn nearest(&self, color: Rgba) -> &PaletteEntry {
        let (idx, _) = self.find_nearest(color);
        &self.entries[idx]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Find the nearest entry in a raw slice of palette entries.
///
/// Same rule as [`Palette::nearest`], for callers that hold entries outside
/// a [`Palette`].
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPalette`] if `entries` is empty.
pub fn nearest(color: Rgba, entries: &[PaletteEntry]) -> Result<&PaletteEntry, PaletteError> {
    let mut best: Option<(&PaletteEntry, u32)> = None;
    for entry in entries {
        let dist = color.distance_squared(entry.color);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((entry, dist)),
        }
    }
    best.map(|(entry, _)| entry).ok_or(PaletteError::EmptyPalette)
}
