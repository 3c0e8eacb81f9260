//! Pattern cells and grid views.

use crate::color::Rgba;

/// Text written into every grid view for a cell with nothing to stitch.
pub const SENTINEL: &str = "none";

/// One cell of a pattern, corresponding to one sprite pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Fully transparent source pixel.
    Empty,
    /// Opaque source pixel matched to a thread.
    Stitch {
        /// Index into the pattern legend
        legend_index: usize,
        /// Source pixel color
        real: Rgba,
        /// Palette color it was matched to
        matched: Rgba,
    },
}

impl Cell {
    /// Returns true for [`Cell::Empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Row-major grid of [`Cell`]s with the dimensions of the cropped sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl PatternGrid {
    pub(crate) fn new(cells: Vec<Cell>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            cells.len(),
            width * height,
            "cell count ({}) must match width * height ({}x{})",
            cells.len(),
            width,
            height,
        );
        debug_assert_eq!(width == 0, height == 0, "empty grids are 0x0");
        Self {
            cells,
            width,
            height,
        }
    }

    /// Returns the grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Number of non-empty cells.
    pub fn stitch_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Render each stitch cell with `f`; empty cells become [`SENTINEL`].
    pub fn render<F>(&self, mut f: F) -> Vec<Vec<String>>
    where
        F: FnMut(usize, Rgba, Rgba) -> String,
    {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match *cell {
                        Cell::Empty => SENTINEL.to_string(),
                        Cell::Stitch {
                            legend_index,
                            real,
                            matched,
                        } => f(legend_index, real, matched),
                    })
                    .collect()
            })
            .collect()
    }

    /// Source colors as `AARRGGBB` hex, sentinel for empty cells.
    pub fn real_color_grid(&self) -> Vec<Vec<String>> {
        self.render(|_, real, _| real.to_argb_hex())
    }

    /// Matched palette colors as `AARRGGBB` hex, sentinel for empty cells.
    pub fn palette_color_grid(&self) -> Vec<Vec<String>> {
        self.render(|_, _, matched| matched.to_argb_hex())
    }
}
